//! chainchess-record: オンチェーン・ゲームレコードのデータモデル
//!
//! コントラクトの view 関数（`getGame` / `getGameMoves` / `getBettingInfo`）
//! が返す値を型付けし、表示レイヤが使う純粋な整形処理を提供する。
//! チェーンへのアクセス自体は本 crate の責務外で、値は JSON 等で
//! 受け取る前提。
//!
//! - `status`: ゲームステータス（コントラクトの u8 enum）
//! - `address`: プレイヤーアドレスの検証と短縮表示
//! - `eth`: wei 単位の金額と ETH 表示
//! - `game`: ゲームのメタ情報と棋譜レコード
//! - `betting`: サイドベットのプールとオッズ・払い戻し計算
//! - `history`: 手番号付きの棋譜リスト整形

pub mod address;
pub mod betting;
pub mod error;
pub mod eth;
pub mod game;
pub mod history;
pub mod status;

pub use address::Address;
pub use betting::BettingPools;
pub use error::{RecordError, RecordResult};
pub use eth::{BASE_MOVE_COST_WEI, Wei, format_eth, parse_eth};
pub use game::{GameMeta, GameRecord};
pub use status::GameStatus;
