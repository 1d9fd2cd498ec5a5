//! RSA
//!
//! - 随机选择两个质数$p$和$q$($p\neq q$), 则模数$n=p*q$. 模数的字节长度$k$满足: $2^{(k-1)*8}\le n \lt 2^{k*8}$;
//! - $\lambda(n) = lcm(p-1, q-1)$, 公钥的指数部分$e$满足$1 \lt e \lt \lambda(n)$且和$\lambda(n)$互质;
//! - 那么私钥的指数部分$d$满足: $d*e \equiv 1 \mod \lambda(n)$;
//!
//! 加密/验签: $y = x ^ e \mod n$;
//!
//! 解密/签名: $y = x^d \mod n$;
//!
//! 原理: 欧拉定理$a^{\phi(n)} \equiv 1 \mod n$
//! - $x ^ {k\lambda(n)+1} \equiv x \mod n$
//!
//! 填充方案: RSAES-OAEP(加密), RSASSA-PSS(签名), 两者都使用MGF1.
//!

mod key;
pub use key::{crypt, ExponentMode, PrivateKey, PublicKey, FIXED_PUBLIC_EXPONENT};

mod mgf;
pub use mgf::{mgf1, mgf1_xor};

mod oaep;
pub use oaep::{OAEPDecrypt, OAEPEncrypt};

mod pss;
pub use pss::{PSSSign, PSSVerify};

#[cfg(test)]
mod testdata;
