//! ETSI EN 300 468で規定される記述子と関連する型の定義。

use std::fmt;

use crate::types::{CodeRate, GuardInterval, Hierarchy, Modulation, TransmissionMode};
use crate::utils::BytesExt;

use super::base::Descriptor;

/// サービス形式種別。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceType(pub u8);

impl ServiceType {
    /// デジタルTVサービス。
    pub const DIGITAL_TV: ServiceType = ServiceType(0x01);
    /// デジタル音声サービス。
    pub const DIGITAL_RADIO: ServiceType = ServiceType(0x02);
    /// 文字多重放送サービス。
    pub const TELETEXT: ServiceType = ServiceType(0x03);
    /// NVOD参照サービス。
    pub const NVOD_REFERENCE: ServiceType = ServiceType(0x04);
    /// NVODタイムシフトサービス。
    pub const NVOD_TIME_SHIFTED: ServiceType = ServiceType(0x05);
    /// モザイクサービス。
    pub const MOSAIC: ServiceType = ServiceType(0x06);
    /// FMラジオサービス。
    pub const FM_RADIO: ServiceType = ServiceType(0x07);
    /// DVB SRMサービス。
    pub const DVB_SRM: ServiceType = ServiceType(0x08);
    // 0x09 未定義
    /// 高度符号化デジタル音声サービス。
    pub const ADVANCED_CODEC_RADIO: ServiceType = ServiceType(0x0A);
    /// 高度符号化モザイクサービス。
    pub const ADVANCED_CODEC_MOSAIC: ServiceType = ServiceType(0x0B);
    /// データ放送サービス。
    pub const DATA_BROADCAST: ServiceType = ServiceType(0x0C);
    // 0x0D 未定義
    /// RCSマップ。
    pub const RCS_MAP: ServiceType = ServiceType(0x0E);
    /// RCS FLS。
    pub const RCS_FLS: ServiceType = ServiceType(0x0F);
    /// DVB MHPサービス。
    pub const DVB_MHP: ServiceType = ServiceType(0x10);
    /// MPEG-2 HDデジタルTVサービス。
    pub const MPEG2_HD_TV: ServiceType = ServiceType(0x11);
    // 0x12 - 0x15 未定義
    /// 高度符号化SDデジタルTVサービス。
    pub const ADVANCED_CODEC_SD_TV: ServiceType = ServiceType(0x16);
    /// 高度符号化SD NVODタイムシフトサービス。
    pub const ADVANCED_CODEC_SD_NVOD_TIME_SHIFTED: ServiceType = ServiceType(0x17);
    /// 高度符号化SD NVOD参照サービス。
    pub const ADVANCED_CODEC_SD_NVOD_REFERENCE: ServiceType = ServiceType(0x18);
    /// 高度符号化HDデジタルTVサービス。
    pub const ADVANCED_CODEC_HD_TV: ServiceType = ServiceType(0x19);
    /// 高度符号化HD NVODタイムシフトサービス。
    pub const ADVANCED_CODEC_HD_NVOD_TIME_SHIFTED: ServiceType = ServiceType(0x1A);
    /// 高度符号化HD NVOD参照サービス。
    pub const ADVANCED_CODEC_HD_NVOD_REFERENCE: ServiceType = ServiceType(0x1B);
    // 0x1C - 0x7F 未定義
    // 0x80 - 0xFE 事業者定義
    // 0xFF 未定義

    /// 定義されているサービス種別かどうかを返す。
    #[inline]
    pub fn is_known(&self) -> bool {
        self.label().is_some()
    }

    /// 事業者定義の範囲にあるかどうかを返す。
    #[inline]
    pub fn is_user_defined(&self) -> bool {
        matches!(self.0, 0x80..=0xFE)
    }

    fn label(&self) -> Option<&'static str> {
        let label = match *self {
            ServiceType::DIGITAL_TV => "digital television",
            ServiceType::DIGITAL_RADIO => "digital radio sound",
            ServiceType::TELETEXT => "teletext",
            ServiceType::NVOD_REFERENCE => "NVOD reference",
            ServiceType::NVOD_TIME_SHIFTED => "NVOD time-shifted",
            ServiceType::MOSAIC => "mosaic",
            ServiceType::FM_RADIO => "FM radio",
            ServiceType::DVB_SRM => "DVB SRM",
            ServiceType::ADVANCED_CODEC_RADIO => "advanced codec digital radio sound",
            ServiceType::ADVANCED_CODEC_MOSAIC => "advanced codec mosaic",
            ServiceType::DATA_BROADCAST => "data broadcast",
            ServiceType::RCS_MAP => "RCS Map",
            ServiceType::RCS_FLS => "RCS FLS",
            ServiceType::DVB_MHP => "DVB MHP",
            ServiceType::MPEG2_HD_TV => "MPEG-2 HD digital television",
            ServiceType::ADVANCED_CODEC_SD_TV => "advanced codec SD digital television",
            ServiceType::ADVANCED_CODEC_SD_NVOD_TIME_SHIFTED => {
                "advanced codec SD NVOD time-shifted"
            }
            ServiceType::ADVANCED_CODEC_SD_NVOD_REFERENCE => "advanced codec SD NVOD reference",
            ServiceType::ADVANCED_CODEC_HD_TV => "advanced codec HD digital television",
            ServiceType::ADVANCED_CODEC_HD_NVOD_TIME_SHIFTED => {
                "advanced codec HD NVOD time-shifted"
            }
            ServiceType::ADVANCED_CODEC_HD_NVOD_REFERENCE => "advanced codec HD NVOD reference",
            _ => return None,
        };
        Some(label)
    }

    /// サービス形式種別の表示名を返す。
    ///
    /// 未定義の値は`"reserved"`、事業者定義の値は`"user defined"`となる。
    pub fn name(&self) -> &'static str {
        if let Some(label) = self.label() {
            label
        } else if self.is_user_defined() {
            "user defined"
        } else {
            "reserved"
        }
    }
}

impl fmt::Debug for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceType(0x{:02X})", self.0)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ネットワーク名記述子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkNameDescriptor<'a> {
    /// ネットワーク名（文字符号化はそのまま）。
    pub network_name: &'a [u8],
}

impl<'a> Descriptor<'a> for NetworkNameDescriptor<'a> {
    const TAG: u8 = 0x40;

    fn read(data: &'a [u8]) -> Option<NetworkNameDescriptor<'a>> {
        Some(NetworkNameDescriptor { network_name: data })
    }
}

/// サービスリスト記述子におけるサービス。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    /// サービス識別。
    pub service_id: u16,
    /// サービス形式種別。
    pub service_type: ServiceType,
}

/// サービスリスト記述子。
///
/// 3バイトのサービスが個数なしで並んでおり、[`pop`](Self::pop)で先頭から1つずつ読み取る。
///
/// ```
/// # use dvbsi::desc::{Descriptor, ServiceListDescriptor};
/// let mut list = ServiceListDescriptor::read(&[0x00, 0x01, 0x01, 0x00, 0x02, 0x02]).unwrap();
/// let mut ids = Vec::new();
/// while let Some((entry, rem)) = list.pop() {
///     ids.push(entry.service_id);
///     list = rem;
/// }
/// assert_eq!(ids, [1, 2]);
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceListDescriptor<'a>(&'a [u8]);

impl<'a> ServiceListDescriptor<'a> {
    /// サービス1つ分のバイト数。
    pub const ENTRY_LEN: usize = 3;

    /// 先頭のサービスを読み取り、残りと共に返す。
    ///
    /// 残りが1つ分に満たない場合は`None`を返す。
    /// その際に[`is_empty`](Self::is_empty)が`false`であれば途中で切れている。
    pub fn pop(&self) -> Option<(ServiceEntry, ServiceListDescriptor<'a>)> {
        let Some((entry, rem)) = self.0.split_at_checked(Self::ENTRY_LEN) else {
            if !self.0.is_empty() {
                log::debug!("invalid ServiceListDescriptor::service");
            }
            return None;
        };

        let service_id = entry[0..=1].read_be_16();
        let service_type = ServiceType(entry[2]);
        Some((
            ServiceEntry {
                service_id,
                service_type,
            },
            ServiceListDescriptor(rem),
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

impl<'a> Descriptor<'a> for ServiceListDescriptor<'a> {
    const TAG: u8 = 0x41;

    fn read(data: &'a [u8]) -> Option<ServiceListDescriptor<'a>> {
        Some(ServiceListDescriptor(data))
    }
}

/// サービス記述子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor<'a> {
    /// サービス形式種別。
    pub service_type: ServiceType,
    /// 事業者名。
    pub service_provider_name: &'a [u8],
    /// サービス名。
    pub service_name: &'a [u8],
}

impl<'a> Descriptor<'a> for ServiceDescriptor<'a> {
    const TAG: u8 = 0x48;

    fn read(data: &'a [u8]) -> Option<ServiceDescriptor<'a>> {
        let [service_type, service_provider_name_length, ref data @ ..] = *data else {
            log::debug!("invalid ServiceDescriptor");
            return None;
        };

        // 事業者名に続くサービス名長の1バイトも含めて確認する
        let service_provider_name_length = service_provider_name_length as usize;
        if data.len() < service_provider_name_length + 1 {
            log::debug!("invalid ServiceDescriptor::service_provider_name");
            return None;
        }
        let service_provider_name = &data[..service_provider_name_length];
        let service_name_length = data[service_provider_name_length] as usize;
        let data = &data[service_provider_name_length + 1..];

        if data.len() < service_name_length {
            log::debug!("invalid ServiceDescriptor::service_name");
            return None;
        }
        let service_name = &data[..service_name_length];

        Some(ServiceDescriptor {
            service_type: ServiceType(service_type),
            service_provider_name,
            service_name,
        })
    }
}

/// 地上分配システム記述子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrestrialDeliverySystemDescriptor {
    /// 中心周波数（単位はHz）。
    pub centre_frequency: u64,
    /// 帯域幅（単位はHz）。
    pub bandwidth: u32,
    /// 変調方式。
    pub constellation: Modulation,
    /// 階層伝送の形式。
    pub hierarchy: Hierarchy,
    /// 高優先度ストリームの符号化率。
    pub code_rate_hp: CodeRate,
    /// 低優先度ストリームの符号化率。
    pub code_rate_lp: CodeRate,
    /// ガードインターバル。
    pub guard_interval: GuardInterval,
    /// 伝送モード。
    pub transmission_mode: TransmissionMode,
    /// 他の周波数が使用されているかどうか。
    pub other_frequency_flag: bool,
}

impl TerrestrialDeliverySystemDescriptor {
    fn code_rate(value: u8) -> Option<CodeRate> {
        match value {
            0 => Some(CodeRate::Fec1_2),
            1 => Some(CodeRate::Fec2_3),
            2 => Some(CodeRate::Fec3_4),
            3 => Some(CodeRate::Fec5_6),
            4 => Some(CodeRate::Fec7_8),
            _ => None,
        }
    }
}

impl Descriptor<'_> for TerrestrialDeliverySystemDescriptor {
    const TAG: u8 = 0x5A;

    fn read(data: &[u8]) -> Option<TerrestrialDeliverySystemDescriptor> {
        if data.len() < 11 {
            log::debug!("invalid TerrestrialDeliverySystemDescriptor");
            return None;
        }

        // 10Hz単位
        let centre_frequency = data[0..=3].read_be_32() as u64 * 10;
        let bandwidth = match (data[4] & 0b11100000) >> 5 {
            0b000 => 8_000_000,
            0b001 => 7_000_000,
            _ => {
                log::debug!("invalid TerrestrialDeliverySystemDescriptor::bandwidth");
                return None;
            }
        };
        let constellation = match (data[5] & 0b11000000) >> 6 {
            0b00 => Modulation::Qpsk,
            0b01 => Modulation::Qam16,
            0b10 => Modulation::Qam64,
            _ => {
                log::debug!("invalid TerrestrialDeliverySystemDescriptor::constellation");
                return None;
            }
        };
        let hierarchy = match (data[5] & 0b00111000) >> 3 {
            0 => Hierarchy::None,
            1 => Hierarchy::Alpha1,
            2 => Hierarchy::Alpha2,
            3 => Hierarchy::Alpha4,
            4 => Hierarchy::Auto,
            _ => {
                log::debug!("invalid TerrestrialDeliverySystemDescriptor::hierarchy_information");
                return None;
            }
        };
        let Some(code_rate_hp) = Self::code_rate(data[5] & 0b00000111) else {
            log::debug!("invalid TerrestrialDeliverySystemDescriptor::code_rate_HP_stream");
            return None;
        };
        let Some(code_rate_lp) = Self::code_rate((data[6] & 0b11100000) >> 5) else {
            log::debug!("invalid TerrestrialDeliverySystemDescriptor::code_rate_LP_stream");
            return None;
        };
        let guard_interval = match (data[6] & 0b00011000) >> 3 {
            0b00 => GuardInterval::Guard1_32,
            0b01 => GuardInterval::Guard1_16,
            0b10 => GuardInterval::Guard1_8,
            0b11 => GuardInterval::Guard1_4,
            _ => unreachable!(),
        };
        let transmission_mode = match (data[6] & 0b00000110) >> 1 {
            0b00 => TransmissionMode::Mode2k,
            0b01 => TransmissionMode::Mode8k,
            0b10 => TransmissionMode::Mode4k,
            _ => {
                log::debug!("invalid TerrestrialDeliverySystemDescriptor::transmission_mode");
                return None;
            }
        };
        let other_frequency_flag = data[6] & 0b00000001 != 0;

        Some(TerrestrialDeliverySystemDescriptor {
            centre_frequency,
            bandwidth,
            constellation,
            hierarchy,
            code_rate_hp,
            code_rate_lp,
            guard_interval,
            transmission_mode,
            other_frequency_flag,
        })
    }
}
