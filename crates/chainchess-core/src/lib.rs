//! chainchess-core: オンチェーン・チェス棋譜のコアライブラリ
//!
//! コントラクトが保持する棋譜は 16bit 整数の列であり、本 crate は
//! その列を盤面表示に使える形へ復元するための最小限の部品を提供する。
//!
//! - `types`: 升目・指し手などの基本型と 16bit コーデック
//! - `replay`: ルールエンジン（外部 collaborator）へ指し手を順次適用する
//!   リプレイドライバ
//!
//! デコードは全域関数（どの 16bit 値も必ず何らかの指し手に復号される）で、
//! 合法性の判定は `replay::RulesEngine` を実装する外部ライブラリに完全に
//! 委譲する。本 crate 自身はチェスのルールを一切持たない。

pub mod replay;
pub mod types;

pub use replay::{Replay, ReplayHalt, RulesEngine, replay_all, replay_to_ply};
pub use types::{Color, DecodedMove, File, Move, Promotion, Rank, Square};
