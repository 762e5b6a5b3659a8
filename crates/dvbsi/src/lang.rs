//! 言語コード関係の定義。

use std::fmt;

/// ISO 639-2で規定される3文字の言語コード。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LangCode(pub [u8; 3]);

impl LangCode {
    /// 英語。
    pub const ENG: LangCode = LangCode(*b"eng");
    /// ドイツ語。
    pub const DEU: LangCode = LangCode(*b"deu");
    /// フランス語。
    pub const FRA: LangCode = LangCode(*b"fra");
    /// ポーランド語。
    pub const POL: LangCode = LangCode(*b"pol");
    /// スペイン語。
    pub const SPA: LangCode = LangCode(*b"spa");
    /// オリジナル音声（ETSI TS 101 154）。
    pub const QAA: LangCode = LangCode(*b"qaa");

    /// 24ビットに詰められた言語コードから`LangCode`を生成する。
    ///
    /// 上位8ビットは無視される。
    #[inline]
    pub const fn from_u24(code: u32) -> LangCode {
        let [_, a, b, c] = code.to_be_bytes();
        LangCode([a, b, c])
    }

    /// 言語コードを24ビットに詰めて返す。
    #[inline]
    pub const fn to_u24(self) -> u32 {
        let [a, b, c] = self.0;
        u32::from_be_bytes([0, a, b, c])
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0.escape_ascii(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_code() {
        assert_eq!(LangCode::from_u24(0x656E67), LangCode::ENG);
        assert_eq!(LangCode::from_u24(0xFF706F6C), LangCode::POL);
        assert_eq!(LangCode::DEU.to_u24(), 0x646575);

        assert_eq!(LangCode::FRA.to_string(), "fra");
        assert_eq!(LangCode([b'e', 0xFF, b'g']).to_string(), "e\\xffg");
    }
}
