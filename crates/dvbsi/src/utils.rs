use std::fmt;

/// バイト列用拡張トレイト。
///
/// 各メソッドは事前に長さを確認したデータに対して呼び出すことを前提とする。
pub trait BytesExt {
    /// 先頭からビッグエンディアンで16ビット符号無し整数を読み込む。
    ///
    /// # パニック
    ///
    /// 長さが2未満の場合はパニックする。
    fn read_be_16(&self) -> u16;

    /// 先頭からビッグエンディアンで24ビット符号無し整数を読み込む。
    ///
    /// # パニック
    ///
    /// 長さが3未満の場合はパニックする。
    fn read_be_24(&self) -> u32;

    /// 先頭からビッグエンディアンで32ビット符号無し整数を読み込む。
    ///
    /// # パニック
    ///
    /// 長さが4未満の場合はパニックする。
    fn read_be_32(&self) -> u32;
}

impl BytesExt for [u8] {
    #[inline]
    fn read_be_16(&self) -> u16 {
        u16::from_be_bytes([self[0], self[1]])
    }

    #[inline]
    fn read_be_24(&self) -> u32 {
        u32::from_be_bytes([0, self[0], self[1], self[2]])
    }

    #[inline]
    fn read_be_32(&self) -> u32 {
        u32::from_be_bytes([self[0], self[1], self[2], self[3]])
    }
}

/// `Debug`で値を`0x`付きの大文字16進数として表示するためのラッパー。
pub struct UpperHex<T>(pub T);

impl<T: fmt::UpperHex> fmt::Debug for UpperHex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// 内包する整数に`Display`や各種基数表示を委譲する。
macro_rules! delegate_fmt {
    ($name:ident) => {
        impl std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::fmt::Binary for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Binary::fmt(&self.0, f)
            }
        }

        impl std::fmt::Octal for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Octal::fmt(&self.0, f)
            }
        }

        impl std::fmt::LowerHex for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl std::fmt::UpperHex for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::UpperHex::fmt(&self.0, f)
            }
        }
    };
}

// マクロはpub useできない
pub(crate) use delegate_fmt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_be() {
        assert_eq!(b"\x12\x34\x56\x78"[..].read_be_16(), 0x1234);
        assert_eq!(b"\x12\x34\x56\x78"[..].read_be_24(), 0x123456);
        assert_eq!(b"\x12\x34\x56\x78\x9A\xBC\xDE"[..].read_be_32(), 0x12345678);
    }

    #[test]
    fn test_upper_hex() {
        assert_eq!(format!("{:?}", UpperHex(0x5A_u8)), "0x5A");
        assert_eq!(format!("{:?}", UpperHex(0x0B_u8)), "0x0B");
    }
}
