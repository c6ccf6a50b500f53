//! 指し手（Move）

use super::{Promotion, Square};

/// 指し手（16bit、コントラクト互換）
///
/// - bit 0-5:   移動元 (from)
/// - bit 6-11:  移動先 (to)
/// - bit 12-15: 昇格コード（0=なし, 1=N, 2=B, 3=R, 4=Q）
///
/// デコードは全域関数であり、どの `u16` も必ず何らかの指し手に復号される。
/// from == to の禁止や昇格の妥当性はここでは検査しない（合法性の判定は
/// すべてルールエンジン側の責務）。昇格コード 5-15 は「昇格なし」として
/// 読む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u16);

/// デコード済みの指し手
///
/// ルールエンジンへの適用単位。`Move::decode` が生成する immutable な値で、
/// 所有権は呼び出し側にある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
}

impl Move {
    const FROM_MASK: u16 = 0x003F; // bit 0-5
    const TO_MASK: u16 = 0x003F; // bit 6-11（シフト後に適用）
    const TO_SHIFT: u16 = 6;
    const PROMO_MASK: u16 = 0x000F; // bit 12-15（シフト後に適用）
    const PROMO_SHIFT: u16 = 12;

    /// 指し手を生成
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Move {
        let mut m = (from.raw() as u16) | ((to.raw() as u16) << Self::TO_SHIFT);
        if let Some(p) = promotion {
            m |= (p.code() as u16) << Self::PROMO_SHIFT;
        }
        Move(m)
    }

    /// u16からMoveを生成
    ///
    /// 失敗しない。コントラクト側で検証済みの値を読む前提のため、
    /// 拒否パスを持たない。
    #[inline]
    pub const fn from_u16(value: u16) -> Move {
        Move(value)
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// 移動元を取得
    #[inline]
    pub const fn from(self) -> Square {
        // SAFETY: from は 6bit マスク後なので 0-63 の範囲
        unsafe { Square::from_u8_unchecked((self.0 & Self::FROM_MASK) as u8) }
    }

    /// 移動先を取得
    #[inline]
    pub const fn to(self) -> Square {
        // SAFETY: to は 6bit マスク後なので 0-63 の範囲
        unsafe { Square::from_u8_unchecked(((self.0 >> Self::TO_SHIFT) & Self::TO_MASK) as u8) }
    }

    /// 昇格先を取得（昇格なし・未定義コードは None）
    #[inline]
    pub const fn promotion(self) -> Option<Promotion> {
        Promotion::from_code(((self.0 >> Self::PROMO_SHIFT) & Self::PROMO_MASK) as u8)
    }

    /// 昇格手かどうか
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion().is_some()
    }

    /// 全フィールドをデコード
    #[inline]
    pub const fn decode(self) -> DecodedMove {
        DecodedMove {
            from: self.from(),
            to: self.to(),
            promotion: self.promotion(),
        }
    }

    /// 表示用文字列（"e2e4" / "e7e8=Q" 形式）に変換
    pub fn to_display(self) -> String {
        let from = self.from().to_algebraic();
        let to = self.to().to_algebraic();
        match self.promotion() {
            Some(p) => format!("{from}{to}={}", p.to_char_upper()),
            None => format!("{from}{to}"),
        }
    }

    /// 表示形式の文字列からMoveに変換
    ///
    /// "e2e4"、"e7e8=Q"（表示形式）に加えて "e7e8q"（UCI 形式）も
    /// 受け付ける。
    pub fn from_display(s: &str) -> Option<Move> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 {
            return None;
        }

        let from_str: String = chars[0..2].iter().collect();
        let to_str: String = chars[2..4].iter().collect();
        let from = Square::from_algebraic(&from_str)?;
        let to = Square::from_algebraic(&to_str)?;

        let promotion = match chars.len() {
            4 => None,
            // "e7e8q" 形式
            5 => Some(Promotion::from_char(chars[4])?),
            // "e7e8=Q" 形式
            6 if chars[4] == '=' => Some(Promotion::from_char(chars[5])?),
            _ => return None,
        };

        Some(Move::new(from, to, promotion))
    }
}
