//! 記述子に関する基礎の型。

use std::fmt;

use crate::utils::BytesExt;

/// タグと内容を取り出せる、パース前の記述子を表すトレイト。
///
/// セクションを読み込む側が実装し、各記述子の[`Descriptor::parse`]に渡す。
pub trait DescriptorSource<'a> {
    /// 記述子のタグ。
    fn tag(&self) -> u8;

    /// 記述子の内容。`descriptor_tag`と`descriptor_length`は含まない。
    fn data(&self) -> &'a [u8];
}

/// 記述子を表すトレイト。
///
/// 読み取りに失敗した理由は区別せず、すべて`None`として返す。
pub trait Descriptor<'a>: Sized {
    /// この記述子のタグ。
    const TAG: u8;

    /// `data`から記述子を読み取る。
    ///
    /// `data`には`descriptor_tag`と`descriptor_length`は含まない。
    fn read(data: &'a [u8]) -> Option<Self>;

    /// タグを確認した上で`desc`から記述子を読み取る。
    ///
    /// タグが一致しない場合は`None`を返す。
    fn parse<D: DescriptorSource<'a> + ?Sized>(desc: &D) -> Option<Self> {
        if desc.tag() != Self::TAG {
            log::debug!(
                "tag mismatch: expected 0x{:02X}, got 0x{:02X}",
                Self::TAG,
                desc.tag(),
            );
            return None;
        }

        Self::read(desc.data())
    }
}

/// パース前の記述子。
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawDescriptor<'a> {
    /// 記述子のタグ。
    pub tag: u8,

    /// 記述子の内容。
    pub data: &'a [u8],
}

impl<'a> DescriptorSource<'a> for RawDescriptor<'a> {
    #[inline]
    fn tag(&self) -> u8 {
        self.tag
    }

    #[inline]
    fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl<'a> fmt::Debug for RawDescriptor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct PrintBytes<'a>(&'a [u8]);
        impl<'a> fmt::Debug for PrintBytes<'a> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} bytes", self.0.len())
            }
        }

        f.debug_struct("RawDescriptor")
            .field("tag", &crate::utils::UpperHex(self.tag))
            .field("data", &PrintBytes(self.data))
            .finish()
    }
}

/// 複数の記述子からなる記述子群。
#[derive(Clone, PartialEq, Eq)]
pub struct DescriptorBlock<'a>(&'a [u8]);

impl<'a> DescriptorBlock<'a> {
    /// `data`から`length`バイト分の記述子群を読み取り後続データと共に返す。
    ///
    /// 記述子の内容はパースせず、`get`メソッドで初めてパースする。
    ///
    /// データ長が不足している場合は`None`を返す。
    // `length`が`u16`なのは規格上`u16`以上の長さになることがなく、
    // 呼び出し側でのキャストが無意味であるため。
    pub fn read_with_len(data: &'a [u8], length: u16) -> Option<(DescriptorBlock<'a>, &'a [u8])> {
        let (block, rem) = data.split_at_checked(length as usize)?;
        Some((DescriptorBlock(block), rem))
    }

    /// `data`から12ビットの記述子ループ長に続く記述子群を読み取り後続データと共に返す。
    ///
    /// 記述子の内容はパースせず、`get`メソッドで初めてパースする。
    ///
    /// データ長が不足している場合は`None`を返す。
    #[inline]
    pub fn read(data: &'a [u8]) -> Option<(DescriptorBlock<'a>, &'a [u8])> {
        if data.len() < 2 {
            return None;
        }

        let length = data[0..=1].read_be_16() & 0b0000_1111_1111_1111;
        DescriptorBlock::read_with_len(&data[2..], length)
    }

    /// 内包する記述子群のイテレーターを返す。
    #[inline]
    pub fn iter(&self) -> DescriptorIter<'a> {
        DescriptorIter(self.0)
    }

    /// 内包する記述子群から`T`のタグと一致する記述子を読み取って返す。
    ///
    /// `T`のタグと一致する記述子がない場合は`None`を返す。
    pub fn get<T: Descriptor<'a>>(&self) -> Option<T> {
        self.iter()
            .find(|d| d.tag == T::TAG)
            .and_then(|d| T::read(d.data))
    }

    /// 内包する記述子群から`T`のタグと一致する記述子をすべて読み取って返す。
    ///
    /// 読み取りに失敗した記述子は飛ばす。
    pub fn get_all<T: Descriptor<'a>>(&self) -> impl Iterator<Item = T> + 'a {
        self.iter().filter_map(|d| T::parse(&d))
    }
}

impl<'a> fmt::Debug for DescriptorBlock<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DescriptorBlock(")?;
        f.debug_list().entries(self).finish()?;
        f.write_str(")")
    }
}

impl<'a> IntoIterator for &DescriptorBlock<'a> {
    type Item = RawDescriptor<'a>;
    type IntoIter = DescriptorIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`DescriptorBlock`]のイテレーター。
///
/// 長さの足りない記述子に到達した時点で終了する。
#[derive(Clone)]
pub struct DescriptorIter<'a>(&'a [u8]);

impl<'a> Iterator for DescriptorIter<'a> {
    type Item = RawDescriptor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let [tag, length, ref rem @ ..] = *self.0 else {
            return None;
        };
        let Some((data, tail)) = rem.split_at_checked(length as usize) else {
            log::debug!("truncated descriptor: tag 0x{:02X}", tag);
            self.0 = &[];
            return None;
        };

        self.0 = tail;
        Some(RawDescriptor { tag, data })
    }
}

impl<'a> std::iter::FusedIterator for DescriptorIter<'a> {}

impl<'a> fmt::Debug for DescriptorIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DescriptorIter(")?;
        f.debug_list().entries(self.clone()).finish()?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, PartialEq, Eq)]
    struct Dummy<'a>(&'a [u8]);

    impl<'a> Descriptor<'a> for Dummy<'a> {
        const TAG: u8 = 0x80;

        fn read(data: &'a [u8]) -> Option<Dummy<'a>> {
            if data.is_empty() {
                return None;
            }
            Some(Dummy(data))
        }
    }

    #[test]
    fn test_parse_checks_tag() {
        let raw = RawDescriptor {
            tag: 0x80,
            data: b"abc",
        };
        assert_eq!(Dummy::parse(&raw), Some(Dummy(b"abc")));

        let raw = RawDescriptor {
            tag: 0x81,
            data: b"abc",
        };
        assert_eq!(Dummy::parse(&raw), None);
    }

    #[test]
    fn test_descriptor_block() {
        let data = hex_literal::hex!("F0 07 80 01 AA 81 00 80 00 80 01 BB FF");
        let (block, rem) = DescriptorBlock::read(&data).unwrap();
        assert_eq!(rem, &[0x80, 0x01, 0xBB, 0xFF]);

        let tags: Vec<u8> = block.iter().map(|d| d.tag).collect();
        assert_eq!(tags, [0x80, 0x81, 0x80]);

        assert_eq!(block.get::<Dummy>(), Some(Dummy(&[0xAA])));
        // 内容の空な2つ目は読み取れずに飛ばされる
        assert_eq!(block.get_all::<Dummy>().collect::<Vec<_>>(), [Dummy(&[0xAA])]);

        assert_matches!(DescriptorBlock::read(&[0xF0]), None);
        assert_matches!(DescriptorBlock::read(&[0xF0, 0x03, 0x80]), None);
        assert_matches!(DescriptorBlock::read_with_len(&[], 0), Some((_, [])));
    }

    #[test]
    fn test_descriptor_iter_truncated() {
        let (block, _) = DescriptorBlock::read_with_len(&[0x80, 0x01, 0xAA, 0x80, 0x05, 0x00], 6)
            .unwrap();
        let mut iter = block.iter();
        assert_matches!(iter.next(), Some(RawDescriptor { tag: 0x80, data: [0xAA] }));
        assert_matches!(iter.next(), None);
        assert_matches!(iter.next(), None);

        let (block, _) = DescriptorBlock::read_with_len(&[0x80], 1).unwrap();
        assert_matches!(block.iter().next(), None);
    }

    #[test]
    fn test_raw_descriptor_debug() {
        let raw = RawDescriptor {
            tag: 0x0A,
            data: &[0; 4],
        };
        assert_eq!(
            format!("{:?}", raw),
            "RawDescriptor { tag: 0x0A, data: 4 bytes }",
        );
    }
}
