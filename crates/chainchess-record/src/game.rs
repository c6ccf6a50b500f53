//! ゲームのメタ情報と棋譜レコード

use chainchess_core::Color;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::RecordResult;
use crate::eth::{self, Wei};
use crate::status::GameStatus;

/// `getGame` が返すゲームのメタ情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameMeta {
    pub white: Address,
    pub black: Address,
    /// ポット総額（wei）。JSONでは10進文字列
    #[serde(with = "crate::eth::wei_string")]
    pub pot: Wei,
    pub stake_multiplier: u64,
    /// 最終着手時刻（unix秒）
    pub last_move_time: u64,
    pub move_count: u64,
    pub status: GameStatus,
}

impl GameMeta {
    /// ゲームが存在するかどうか（status 0 は「該当IDなし」）
    #[inline]
    pub fn exists(&self) -> bool {
        self.status != GameStatus::None
    }

    /// stake multiplier 込みの1手あたりコスト
    #[inline]
    pub fn cost_per_move(&self) -> Wei {
        eth::cost_per_move(self.stake_multiplier)
    }

    /// 手番（進行中のゲームのみ。偶数手適用済みなら白番）
    pub fn side_to_move(&self, moves_played: usize) -> Option<Color> {
        if self.status != GameStatus::Active {
            return None;
        }
        if moves_played % 2 == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }
}

/// 1ゲーム分のオンチェーン棋譜レコード
///
/// `getGame` のメタ情報と `getGameMoves` の 16bit move 列を束ねたもの。
/// JSON 表現はメタ情報をフラットに展開する（フロントエンドの
/// GameData と同じ形）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: u64,
    #[serde(flatten)]
    pub meta: GameMeta,
    pub moves: Vec<u16>,
}

impl GameRecord {
    /// JSON文字列からの読み込み
    pub fn from_json(s: &str) -> RecordResult<GameRecord> {
        let record: GameRecord = serde_json::from_str(s)?;
        record.validate();
        Ok(record)
    }

    /// JSON文字列への書き出し
    pub fn to_json(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 手番（進行中のゲームのみ）
    #[inline]
    pub fn side_to_move(&self) -> Option<Color> {
        self.meta.side_to_move(self.moves.len())
    }

    /// レコードの整合性チェック
    ///
    /// メタ情報の move_count と棋譜の長さが食い違う（コントラクトと
    /// 状態が desync している）場合は警告するだけで、エラーにはしない。
    /// リプレイ側が不正手検出で安全に停止するため。
    pub fn validate(&self) {
        if self.meta.move_count != self.moves.len() as u64 {
            warn!(
                "game {}: move_count {} does not match move list length {}",
                self.game_id,
                self.meta.move_count,
                self.moves.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meta(status: GameStatus) -> GameMeta {
        GameMeta {
            white: Address::parse("0x1111111111111111111111111111111111111111").unwrap(),
            black: Address::parse("0x2222222222222222222222222222222222222222").unwrap(),
            pot: 600_000_000_000_000,
            stake_multiplier: 2,
            last_move_time: 1_770_000_000,
            move_count: 3,
            status,
        }
    }

    #[test]
    fn test_meta_exists() {
        assert!(sample_meta(GameStatus::Active).exists());
        assert!(!sample_meta(GameStatus::None).exists());
    }

    #[test]
    fn test_meta_cost_per_move() {
        assert_eq!(sample_meta(GameStatus::Active).cost_per_move(), 200_000_000_000_000);
    }

    #[test]
    fn test_side_to_move() {
        let meta = sample_meta(GameStatus::Active);
        assert_eq!(meta.side_to_move(0), Some(Color::White));
        assert_eq!(meta.side_to_move(3), Some(Color::Black));
        assert_eq!(meta.side_to_move(4), Some(Color::White));

        // 進行中でなければ手番なし
        assert_eq!(sample_meta(GameStatus::WhiteWins).side_to_move(4), None);
        assert_eq!(sample_meta(GameStatus::Pending).side_to_move(0), None);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = GameRecord {
            game_id: 7,
            meta: sample_meta(GameStatus::Active),
            moves: vec![1804, 2356, 1350],
        };
        let json = record.to_json().unwrap();
        let back = GameRecord::from_json(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_json_is_flat() {
        // フロントエンドの GameData と同じフラットな形で読めること
        let json = r#"{
            "game_id": 1,
            "white": "0x1111111111111111111111111111111111111111",
            "black": "0x2222222222222222222222222222222222222222",
            "pot": "600000000000000",
            "stake_multiplier": 2,
            "last_move_time": 1770000000,
            "move_count": 2,
            "status": 2,
            "moves": [1804, 2356]
        }"#;
        let record = GameRecord::from_json(json).unwrap();
        assert_eq!(record.meta.status, GameStatus::Active);
        assert_eq!(record.moves, vec![1804, 2356]);
        assert_eq!(record.side_to_move(), Some(Color::White));
    }

    #[test]
    fn test_record_json_rejects_bad_status() {
        let json = r#"{
            "game_id": 1,
            "white": "0x1111111111111111111111111111111111111111",
            "black": "0x2222222222222222222222222222222222222222",
            "pot": "0",
            "stake_multiplier": 1,
            "last_move_time": 0,
            "move_count": 0,
            "status": 9,
            "moves": []
        }"#;
        assert!(GameRecord::from_json(json).is_err());
    }
}
