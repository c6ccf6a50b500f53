/// 16bit move のデコードツール
///
/// 使い方:
///   # 10進・16進の move 値を引数で渡す
///   decode_moves 1804 2356 0x4f34
///
///   # 引数なしなら標準入力（空白区切り）から読む
///   cat moves.txt | decode_moves
///
///   # JSON出力モード
///   decode_moves --json 1804 20276
use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use chainchess_core::Move;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(about = "16bit move のデコード")]
struct Cli {
    /// デコード対象の move 値（10進または 0x 付き16進）
    values: Vec<String>,

    /// フィールド単位の内訳も表示する
    #[arg(long)]
    verbose: bool,

    /// JSON出力モード
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// JSON出力用の構造体（シリアライズのみ）
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DecodedMoveJson {
    raw: u16,
    from: String,
    to: String,
    promotion: Option<char>,
    display: String,
}

fn parse_move_value(s: &str) -> Result<u16> {
    let parsed = if let Some(hex_part) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex_part, 16)
    } else {
        s.parse::<u16>()
    };
    parsed.with_context(|| format!("invalid move value: {s}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let raw_values = if cli.values.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        cli.values.clone()
    };
    if raw_values.is_empty() {
        bail!("no move values given");
    }

    let moves = raw_values
        .iter()
        .map(|s| parse_move_value(s))
        .collect::<Result<Vec<u16>>>()?;

    if cli.json {
        let decoded: Vec<DecodedMoveJson> = moves
            .iter()
            .map(|&raw| {
                let mv = Move::from_u16(raw);
                DecodedMoveJson {
                    raw,
                    from: mv.from().to_algebraic(),
                    to: mv.to().to_algebraic(),
                    promotion: mv.promotion().map(|p| p.to_char()),
                    display: mv.to_display(),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    for (i, &raw) in moves.iter().enumerate() {
        let mv = Move::from_u16(raw);
        if cli.verbose {
            let promotion = match mv.promotion() {
                Some(p) => p.to_char().to_string(),
                None => "-".to_string(),
            };
            println!(
                "{i:4}: {raw:5} (0x{raw:04x})  from={} to={} promotion={}  {}",
                mv.from().to_algebraic(),
                mv.to().to_algebraic(),
                promotion,
                mv.to_display()
            );
        } else {
            println!("{}", mv.to_display());
        }
    }

    Ok(())
}
