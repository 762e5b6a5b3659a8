//! DVBのPSI/SIに含まれる記述子を読み込むためのクレート。

#![deny(missing_docs)]

pub mod desc;
pub mod lang;
pub mod pid;
pub mod types;
mod utils;

pub use desc::{Descriptor, DescriptorBlock, DescriptorSource, RawDescriptor};
pub use lang::LangCode;
pub use pid::Pid;
