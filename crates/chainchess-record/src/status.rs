//! ゲームステータス（GameStatus）

use chainchess_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// コントラクトが返すゲームステータス
///
/// `getGame` の `status` フィールド（u8）に対応する。0 (None) は
/// 「そのゲームIDが存在しない」ことを意味する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GameStatus {
    None = 0,
    Pending = 1,
    Active = 2,
    WhiteWins = 3,
    BlackWins = 4,
    Draw = 5,
    Cancelled = 6,
}

impl GameStatus {
    /// 表示用ラベル
    pub const fn label(self) -> &'static str {
        match self {
            GameStatus::None => "None",
            GameStatus::Pending => "Pending",
            GameStatus::Active => "Active",
            GameStatus::WhiteWins => "White Wins",
            GameStatus::BlackWins => "Black Wins",
            GameStatus::Draw => "Draw",
            GameStatus::Cancelled => "Cancelled",
        }
    }

    /// 決着済み（勝敗・引き分け・中止）かどうか
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(
            self,
            GameStatus::WhiteWins | GameStatus::BlackWins | GameStatus::Draw | GameStatus::Cancelled
        )
    }

    /// ベットを受け付ける状態かどうか
    #[inline]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, GameStatus::Pending | GameStatus::Active)
    }

    /// 勝者の手番（勝敗がついていなければ None）
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl TryFrom<u8> for GameStatus {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameStatus::None),
            1 => Ok(GameStatus::Pending),
            2 => Ok(GameStatus::Active),
            3 => Ok(GameStatus::WhiteWins),
            4 => Ok(GameStatus::BlackWins),
            5 => Ok(GameStatus::Draw),
            6 => Ok(GameStatus::Cancelled),
            other => Err(RecordError::InvalidStatus(other)),
        }
    }
}

impl From<GameStatus> for u8 {
    fn from(status: GameStatus) -> u8 {
        status as u8
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_u8() {
        assert_eq!(GameStatus::try_from(0).unwrap(), GameStatus::None);
        assert_eq!(GameStatus::try_from(2).unwrap(), GameStatus::Active);
        assert_eq!(GameStatus::try_from(6).unwrap(), GameStatus::Cancelled);
        for code in 7..=255u8 {
            assert!(GameStatus::try_from(code).is_err());
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GameStatus::WhiteWins.label(), "White Wins");
        assert_eq!(GameStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn test_status_predicates() {
        assert!(GameStatus::Draw.is_finished());
        assert!(GameStatus::Cancelled.is_finished());
        assert!(!GameStatus::Active.is_finished());

        assert!(GameStatus::Pending.accepts_bets());
        assert!(GameStatus::Active.accepts_bets());
        assert!(!GameStatus::WhiteWins.accepts_bets());

        assert_eq!(GameStatus::WhiteWins.winner(), Some(Color::White));
        assert_eq!(GameStatus::BlackWins.winner(), Some(Color::Black));
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_status_serde_as_u8() {
        let json = serde_json::to_string(&GameStatus::Active).unwrap();
        assert_eq!(json, "2");
        let status: GameStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, GameStatus::WhiteWins);
        assert!(serde_json::from_str::<GameStatus>("7").is_err());
    }
}
