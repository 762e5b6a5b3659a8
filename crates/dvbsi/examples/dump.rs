use std::path::PathBuf;

use dvbsi::desc::{
    ConditionalAccessDescriptor, Iso639LanguageDescriptor, NetworkNameDescriptor,
    ServiceDescriptor, ServiceListDescriptor, TerrestrialDeliverySystemDescriptor,
};
use dvbsi::{Descriptor, DescriptorBlock, RawDescriptor};

#[derive(Debug)]
struct AppArgs {
    path: PathBuf,
    with_loop_length: bool,
}

impl AppArgs {
    const HELP: &'static str = "\
16進数で書かれた記述子を読み取って表示するコマンド

USAGE:
  dump [OPTIONS] [PATH]

FLAGS:
  -h, --help    このヘルプを表示する
  --loop        先頭の2バイトを記述子ループ長として扱う

ARGS:
  <PATH>        記述子を16進数で書いたテキストファイルのパス
";

    pub fn parse() -> Result<AppArgs, Box<dyn std::error::Error>> {
        let mut args = pico_args::Arguments::from_env();

        if args.contains(["-h", "--help"]) {
            println!("{}", Self::HELP);
            std::process::exit(0);
        }

        let with_loop_length = args.contains("--loop");

        Ok(AppArgs {
            path: args.free_from_str()?,
            with_loop_length,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum HexError {
    #[error("invalid hex digit {0:?} at {1}")]
    InvalidDigit(char, usize),

    #[error("odd number of hex digits")]
    OddLength,
}

/// 空白を無視して16進数の文字列をバイト列にする。
fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let mut digits = Vec::new();
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            continue;
        }
        let Some(d) = c.to_digit(16) else {
            return Err(HexError::InvalidDigit(c, i));
        };
        digits.push(d as u8);
    }

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    Ok(digits.chunks_exact(2).map(|d| d[0] << 4 | d[1]).collect())
}

fn dump(raw: &RawDescriptor) {
    print!("0x{:02X} ", raw.tag);

    match raw.tag {
        ConditionalAccessDescriptor::TAG => match ConditionalAccessDescriptor::parse(raw) {
            Some(cad) => println!("CA: system={} pid={}", cad.ca_system_id, cad.ca_pid),
            None => println!("CA: invalid"),
        },

        Iso639LanguageDescriptor::TAG => {
            let Some(mut ld) = Iso639LanguageDescriptor::parse(raw) else {
                println!("ISO 639 language: invalid");
                return;
            };
            print!("ISO 639 language:");
            while let Some((lang, rem)) = ld.pop() {
                print!(" {}({})", lang.lang_code, lang.audio_type);
                ld = rem;
            }
            if !ld.is_empty() {
                print!(" [{} bytes left]", ld.len());
            }
            println!();
        }

        NetworkNameDescriptor::TAG => match NetworkNameDescriptor::parse(raw) {
            Some(nnd) => println!("network name: {}", nnd.network_name.escape_ascii()),
            None => println!("network name: invalid"),
        },

        ServiceListDescriptor::TAG => {
            let Some(mut sld) = ServiceListDescriptor::parse(raw) else {
                println!("service list: invalid");
                return;
            };
            print!("service list:");
            while let Some((entry, rem)) = sld.pop() {
                print!(" 0x{:04X}({})", entry.service_id, entry.service_type);
                sld = rem;
            }
            if !sld.is_empty() {
                print!(" [{} bytes left]", sld.len());
            }
            println!();
        }

        ServiceDescriptor::TAG => match ServiceDescriptor::parse(raw) {
            Some(sd) => println!(
                "service: {} \"{}\" by \"{}\"",
                sd.service_type,
                sd.service_name.escape_ascii(),
                sd.service_provider_name.escape_ascii(),
            ),
            None => println!("service: invalid"),
        },

        TerrestrialDeliverySystemDescriptor::TAG => {
            match TerrestrialDeliverySystemDescriptor::parse(raw) {
                Some(tds) => println!(
                    "terrestrial: {}Hz bw={}Hz {} hierarchy={} HP={} LP={} guard={} mode={}{}",
                    tds.centre_frequency,
                    tds.bandwidth,
                    tds.constellation,
                    tds.hierarchy,
                    tds.code_rate_hp,
                    tds.code_rate_lp,
                    tds.guard_interval,
                    tds.transmission_mode,
                    if tds.other_frequency_flag { " other-freq" } else { "" },
                ),
                None => println!("terrestrial: invalid"),
            }
        }

        _ => println!("{:?}", raw),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = AppArgs::parse()?;

    env_logger::init();

    let text = std::fs::read_to_string(&args.path)?;
    let data = decode_hex(&text)?;

    let block = if args.with_loop_length {
        DescriptorBlock::read(&data).map(|(block, _)| block)
    } else {
        DescriptorBlock::read_with_len(&data, data.len().min(u16::MAX as usize) as u16)
            .map(|(block, _)| block)
    };
    let Some(block) = block else {
        return Err("descriptor loop is shorter than its length".into());
    };

    for raw in &block {
        dump(&raw);
    }

    Ok(())
}
