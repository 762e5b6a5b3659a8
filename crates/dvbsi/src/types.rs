//! 受信機の選局パラメータとして使われる、放送方式に関する列挙型。

use std::fmt;

/// 変調方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modulation {
    /// QPSK。
    Qpsk,
    /// 16QAM。
    Qam16,
    /// 32QAM。
    Qam32,
    /// 64QAM。
    Qam64,
    /// 128QAM。
    Qam128,
    /// 256QAM。
    Qam256,
    /// 自動。
    Auto,
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Modulation::Qpsk => "QPSK",
            Modulation::Qam16 => "16-QAM",
            Modulation::Qam32 => "32-QAM",
            Modulation::Qam64 => "64-QAM",
            Modulation::Qam128 => "128-QAM",
            Modulation::Qam256 => "256-QAM",
            Modulation::Auto => "auto",
        })
    }
}

/// 階層伝送の形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hierarchy {
    /// 非階層。
    None,
    /// α=1。
    Alpha1,
    /// α=2。
    Alpha2,
    /// α=4。
    Alpha4,
    /// 自動。
    Auto,
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Hierarchy::None => "none",
            Hierarchy::Alpha1 => "1",
            Hierarchy::Alpha2 => "2",
            Hierarchy::Alpha4 => "4",
            Hierarchy::Auto => "auto",
        })
    }
}

/// 畳み込み符号の符号化率。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodeRate {
    /// 符号化なし。
    None,
    /// 1/2。
    Fec1_2,
    /// 2/3。
    Fec2_3,
    /// 3/4。
    Fec3_4,
    /// 4/5。
    Fec4_5,
    /// 5/6。
    Fec5_6,
    /// 6/7。
    Fec6_7,
    /// 7/8。
    Fec7_8,
    /// 8/9。
    Fec8_9,
    /// 自動。
    Auto,
}

impl fmt::Display for CodeRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CodeRate::None => "none",
            CodeRate::Fec1_2 => "1/2",
            CodeRate::Fec2_3 => "2/3",
            CodeRate::Fec3_4 => "3/4",
            CodeRate::Fec4_5 => "4/5",
            CodeRate::Fec5_6 => "5/6",
            CodeRate::Fec6_7 => "6/7",
            CodeRate::Fec7_8 => "7/8",
            CodeRate::Fec8_9 => "8/9",
            CodeRate::Auto => "auto",
        })
    }
}

/// ガードインターバル。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GuardInterval {
    /// 1/32
    Guard1_32,
    /// 1/16
    Guard1_16,
    /// 1/8
    Guard1_8,
    /// 1/4
    Guard1_4,
    /// 自動。
    Auto,
}

impl fmt::Display for GuardInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            GuardInterval::Guard1_32 => "1/32",
            GuardInterval::Guard1_16 => "1/16",
            GuardInterval::Guard1_8 => "1/8",
            GuardInterval::Guard1_4 => "1/4",
            GuardInterval::Auto => "auto",
        })
    }
}

/// OFDMの伝送モード。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransmissionMode {
    /// 2kモード。
    Mode2k,
    /// 8kモード。
    Mode8k,
    /// 4kモード。
    Mode4k,
    /// 自動。
    Auto,
}

impl fmt::Display for TransmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TransmissionMode::Mode2k => "2k",
            TransmissionMode::Mode8k => "8k",
            TransmissionMode::Mode4k => "4k",
            TransmissionMode::Auto => "auto",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Modulation::Qam64.to_string(), "64-QAM");
        assert_eq!(Hierarchy::Alpha2.to_string(), "2");
        assert_eq!(CodeRate::Fec5_6.to_string(), "5/6");
        assert_eq!(GuardInterval::Guard1_8.to_string(), "1/8");
        assert_eq!(TransmissionMode::Mode8k.to_string(), "8k");
    }
}
