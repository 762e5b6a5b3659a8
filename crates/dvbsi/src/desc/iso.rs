//! MPEG-2 Systems（ISO/IEC 13818-1）で規定される記述子および関連する型の定義。

use std::fmt;

use crate::lang::LangCode;
use crate::pid::Pid;
use crate::utils::BytesExt;

use super::base::Descriptor;

/// 限定受信方式識別（ETSI TS 101 162で登録される）。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaSystemId(pub u16);

impl CaSystemId {
    /// Irdeto。
    pub const IRDETO: CaSystemId = CaSystemId(0x0602);
    /// Viaccess。
    pub const VIACCESS: CaSystemId = CaSystemId(0x0500);
    /// Conax。
    pub const CONAX: CaSystemId = CaSystemId(0x0B00);

    /// 登録されている事業者名を返す。
    ///
    /// 未知の値であれば`None`を返す。
    pub fn vendor(&self) -> Option<&'static str> {
        let vendor = match self.0 {
            0x0100 => "Mediaguard",
            0x0500 => "Viaccess",
            0x0602 | 0x0604 | 0x0606 | 0x0608 | 0x0614 | 0x0622 | 0x0626 | 0x0664 | 0x0692 => {
                "Irdeto"
            }
            0x0700 => "DigiCipher2",
            0x0911 | 0x0919 | 0x0927 | 0x093B | 0x0960 | 0x0961 | 0x0963 | 0x09AC => {
                "Videoguard"
            }
            0x0B00..=0x0B07 | 0x0BAA => "Conax",
            0x0D00 | 0x0D02 | 0x0D03 | 0x0D05 | 0x0D07 | 0x0D20 => "Cryptoworks",
            0x0E00 => "PowerVu",
            0x1702 | 0x1722 | 0x1762 | 0x1800 | 0x1801 | 0x1810 | 0x1830 => "Nagravision",
            0x4AEA => "Cryptoguard",
            _ => return None,
        };
        Some(vendor)
    }
}

impl fmt::Debug for CaSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CaSystemId(0x{:04X})", self.0)
    }
}

/// 事業者名が分かれば`Irdeto(602)`、分からなければ`1234`のように表示する。
impl fmt::Display for CaSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vendor() {
            Some(vendor) => write!(f, "{}({:x})", vendor, self.0),
            None => write!(f, "{:x}", self.0),
        }
    }
}

/// 限定受信方式記述子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalAccessDescriptor<'a> {
    /// 限定受信方式識別。
    pub ca_system_id: CaSystemId,
    /// 限定受信PID。
    pub ca_pid: Pid,
    /// プライベートデータ。
    pub private_data: &'a [u8],
}

impl<'a> Descriptor<'a> for ConditionalAccessDescriptor<'a> {
    const TAG: u8 = 0x09;

    fn read(data: &'a [u8]) -> Option<ConditionalAccessDescriptor<'a>> {
        if data.len() < 4 {
            log::debug!("invalid ConditionalAccessDescriptor");
            return None;
        }

        let ca_system_id = CaSystemId(data[0..=1].read_be_16());
        let ca_pid = Pid::read(&data[2..=3]);
        let private_data = &data[4..];

        Some(ConditionalAccessDescriptor {
            ca_system_id,
            ca_pid,
            private_data,
        })
    }
}

/// 音声の種別。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AudioType(pub u8);

impl AudioType {
    /// 未定義。
    pub const UNDEFINED: AudioType = AudioType(0x00);
    /// 効果音のみ。
    pub const CLEAN_EFFECTS: AudioType = AudioType(0x01);
    /// 聴覚障害者向け。
    pub const HEARING_IMPAIRED: AudioType = AudioType(0x02);
    /// 視覚障害者向け解説。
    pub const VISUAL_IMPAIRED_COMMENTARY: AudioType = AudioType(0x03);
    // 0x04 - 0xFF 未定義

    /// 音声種別の表示名を返す。
    ///
    /// 未定義の値は`"reserved"`となる。
    pub fn name(&self) -> &'static str {
        match *self {
            AudioType::UNDEFINED => "undefined",
            AudioType::CLEAN_EFFECTS => "clean effects",
            AudioType::HEARING_IMPAIRED => "hearing impaired",
            AudioType::VISUAL_IMPAIRED_COMMENTARY => "visual impaired commentary",
            _ => "reserved",
        }
    }
}

impl fmt::Display for AudioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ISO 639言語記述子における言語。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso639Language {
    /// 言語コード。
    pub lang_code: LangCode,
    /// 音声の種別。
    pub audio_type: AudioType,
}

/// ISO 639言語記述子。
///
/// 4バイトの言語が個数なしで並んでおり、[`pop`](Self::pop)で先頭から1つずつ読み取る。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso639LanguageDescriptor<'a>(&'a [u8]);

impl<'a> Iso639LanguageDescriptor<'a> {
    /// 言語1つ分のバイト数。
    pub const ENTRY_LEN: usize = 4;

    /// 先頭の言語を読み取り、残りと共に返す。
    ///
    /// 残りが1つ分に満たない場合は`None`を返す。
    /// その際に[`is_empty`](Self::is_empty)が`false`であれば途中で切れている。
    pub fn pop(&self) -> Option<(Iso639Language, Iso639LanguageDescriptor<'a>)> {
        let Some((entry, rem)) = self.0.split_at_checked(Self::ENTRY_LEN) else {
            if !self.0.is_empty() {
                log::debug!("invalid Iso639LanguageDescriptor::language");
            }
            return None;
        };

        let lang_code = LangCode::from_u24(entry[0..=2].read_be_24());
        let audio_type = AudioType(entry[3]);
        Some((
            Iso639Language {
                lang_code,
                audio_type,
            },
            Iso639LanguageDescriptor(rem),
        ))
    }

    /// 未読み取りのバイト数を返す。
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 未読み取りのデータがないかどうかを返す。
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 未読み取りのデータを返す。
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> Descriptor<'a> for Iso639LanguageDescriptor<'a> {
    const TAG: u8 = 0x0A;

    fn read(data: &'a [u8]) -> Option<Iso639LanguageDescriptor<'a>> {
        Some(Iso639LanguageDescriptor(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc::RawDescriptor;
    use assert_matches::assert_matches;

    #[test]
    fn test_ca_system_id() {
        assert_eq!(CaSystemId::IRDETO.vendor(), Some("Irdeto"));
        assert_eq!(CaSystemId(0x0B05).vendor(), Some("Conax"));
        assert_eq!(CaSystemId(0x0B08).vendor(), None);

        assert_eq!(CaSystemId::IRDETO.to_string(), "Irdeto(602)");
        assert_eq!(CaSystemId(0x4AEA).to_string(), "Cryptoguard(4aea)");
        assert_eq!(CaSystemId(0x1234).to_string(), "1234");
        assert_eq!(CaSystemId(0x000F).to_string(), "f");
        assert_eq!(format!("{:?}", CaSystemId::VIACCESS), "CaSystemId(0x0500)");
    }

    #[test]
    fn test_conditional_access_descriptor() {
        let raw = RawDescriptor {
            tag: 0x09,
            data: &[0x06, 0x02, 0xFF, 0xFF],
        };
        let cad = ConditionalAccessDescriptor::parse(&raw).unwrap();
        assert_eq!(cad.ca_system_id, CaSystemId(0x0602));
        assert_eq!(cad.ca_system_id.vendor(), Some("Irdeto"));
        assert_eq!(cad.ca_pid.get(), 0x1FFF);
        assert!(cad.private_data.is_empty());
        assert_eq!(ConditionalAccessDescriptor::parse(&raw), Some(cad));

        let cad = ConditionalAccessDescriptor::read(&[0x18, 0x01, 0xE1, 0x23, 0xAB, 0xCD]).unwrap();
        assert_eq!(cad.ca_system_id.to_string(), "Nagravision(1801)");
        assert_eq!(cad.ca_pid, Pid::new(0x0123));
        assert_eq!(cad.private_data, &[0xAB, 0xCD]);

        assert_matches!(ConditionalAccessDescriptor::read(&[0x06, 0x02, 0xFF]), None);
        assert_matches!(
            ConditionalAccessDescriptor::parse(&RawDescriptor {
                tag: 0x0A,
                data: &[0x06, 0x02, 0xFF, 0xFF],
            }),
            None
        );
    }

    #[test]
    fn test_audio_type() {
        assert_eq!(AudioType(0).name(), "undefined");
        assert_eq!(AudioType(1).name(), "clean effects");
        assert_eq!(AudioType(2).name(), "hearing impaired");
        assert_eq!(AudioType(3).to_string(), "visual impaired commentary");
        assert!((4..=255).all(|t| AudioType(t).name() == "reserved"));
    }

    #[test]
    fn test_iso_639_language_descriptor() {
        let raw = RawDescriptor {
            tag: 0x0A,
            data: &hex_literal::hex!("65 6E 67 00 70 6F 6C 03"),
        };
        let ld = Iso639LanguageDescriptor::parse(&raw).unwrap();
        assert_eq!(ld.len(), 8);

        let (lang, ld) = ld.pop().unwrap();
        assert_eq!(
            lang,
            Iso639Language {
                lang_code: LangCode::ENG,
                audio_type: AudioType::UNDEFINED,
            }
        );
        let (lang, ld) = ld.pop().unwrap();
        assert_eq!(lang.lang_code, LangCode::POL);
        assert_eq!(lang.audio_type, AudioType::VISUAL_IMPAIRED_COMMENTARY);
        assert!(ld.is_empty());
        assert_matches!(ld.pop(), None);

        assert_matches!(
            Iso639LanguageDescriptor::parse(&RawDescriptor { tag: 0x09, data: &[] }),
            None
        );
    }

    #[test]
    fn test_iso_639_language_descriptor_truncated() {
        let ld = Iso639LanguageDescriptor::read(b"deu\x04fr").unwrap();
        let (lang, ld) = ld.pop().unwrap();
        assert_eq!(lang.lang_code, LangCode::DEU);
        assert_eq!(lang.audio_type.name(), "reserved");
        assert_matches!(ld.pop(), None);
        assert_eq!(ld.as_bytes(), b"fr");
    }
}
