//! Edge states and piece labels.
//!
//! A piece has four sides. Each side is either a tab that protrudes into the
//! neighbor (`Out`), a socket that receives the neighbor's tab (`In`), or a
//! straight cut on the outer border of the puzzle (`Flat`).

/// State of one side of a puzzle piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeState {
    Out,
    In,
    Flat,
}

impl EdgeState {
    /// Returns the state the neighbor must have on the shared edge.
    ///
    /// `Flat` has no neighbor, so it maps to itself.
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            EdgeState::Out => EdgeState::In,
            EdgeState::In => EdgeState::Out,
            EdgeState::Flat => EdgeState::Flat,
        }
    }

    /// Single character used by the text formatter.
    pub const fn symbol(self) -> char {
        match self {
            EdgeState::Out => 'O',
            EdgeState::In => 'I',
            EdgeState::Flat => '-',
        }
    }
}

/// A side of a piece, in label order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All four sides in label order: top, right, bottom, left.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The side of the neighboring piece that touches this side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Row and column step towards the neighbor on this side.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (-1, 0),
            Side::Right => (0, 1),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
        }
    }

    /// Bit of this side in the packed form (top is the most significant).
    const fn bit(self) -> u8 {
        match self {
            Side::Top => 0b1000,
            Side::Right => 0b0100,
            Side::Bottom => 0b0010,
            Side::Left => 0b0001,
        }
    }
}

/// Side order of the digits in a shape class name.
const CLASS_ORDER: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

/// Edge pattern of one piece: (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceLabel {
    pub top: EdgeState,
    pub right: EdgeState,
    pub bottom: EdgeState,
    pub left: EdgeState,
}

impl PieceLabel {
    /// A piece with every side flat, i.e. a 1x1 puzzle.
    pub const FLAT: Self = Self {
        top: EdgeState::Flat,
        right: EdgeState::Flat,
        bottom: EdgeState::Flat,
        left: EdgeState::Flat,
    };

    pub const fn new(top: EdgeState, right: EdgeState, bottom: EdgeState, left: EdgeState) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[inline]
    pub const fn get(&self, side: Side) -> EdgeState {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    #[inline]
    pub fn set(&mut self, side: Side, state: EdgeState) {
        match side {
            Side::Top => self.top = state,
            Side::Right => self.right = state,
            Side::Bottom => self.bottom = state,
            Side::Left => self.left = state,
        }
    }

    /// Edge states in label order.
    pub const fn edges(&self) -> [EdgeState; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Number of flat sides: 2 for a corner, 1 for a border piece, 0 inside.
    ///
    /// A 1-row or 1-column puzzle produces pieces with 3 or 4 flat sides.
    pub fn flat_count(&self) -> usize {
        self.edges()
            .iter()
            .filter(|&&state| state == EdgeState::Flat)
            .count()
    }

    pub fn is_border(&self) -> bool {
        self.flat_count() > 0
    }

    pub fn is_corner(&self) -> bool {
        self.flat_count() == 2
    }

    /// Packs the label into 4 bits, top first; a set bit means `Out`.
    ///
    /// `In` and `Flat` both pack to 0, so the packed form is lossy and only
    /// useful together with the piece's grid position.
    pub fn bits(&self) -> u8 {
        Side::ALL
            .iter()
            .filter(|&&side| self.get(side) == EdgeState::Out)
            .fold(0, |packed, side| packed | side.bit())
    }

    /// Shape class name for the rendering layer, e.g. `piece_1010`.
    ///
    /// Digits follow the stylesheet convention: sides in (top, left, bottom,
    /// right) order, `1` for a tab or a flat side, `0` for a socket. Unlike
    /// [`PieceLabel::bits`], border pieces of different shapes get different
    /// names.
    pub fn class_name(&self) -> String {
        let digits: String = CLASS_ORDER
            .iter()
            .map(|&side| match self.get(side) {
                EdgeState::Out | EdgeState::Flat => '1',
                EdgeState::In => '0',
            })
            .collect();
        format!("piece_{digits}")
    }

    /// Four-character form used in text output, e.g. `-OI-`.
    pub fn code(&self) -> String {
        self.edges().iter().map(|state| state.symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_swaps_tab_and_socket() {
        assert_eq!(EdgeState::Out.complement(), EdgeState::In);
        assert_eq!(EdgeState::In.complement(), EdgeState::Out);
        assert_eq!(EdgeState::Flat.complement(), EdgeState::Flat);
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
            let (dr, dc) = side.offset();
            let (or, oc) = side.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0), "offsets of {side:?} must cancel");
        }
    }

    #[test]
    fn test_set_and_get_agree() {
        let mut label = PieceLabel::FLAT;
        label.set(Side::Right, EdgeState::Out);
        label.set(Side::Bottom, EdgeState::In);
        assert_eq!(label.get(Side::Top), EdgeState::Flat);
        assert_eq!(label.get(Side::Right), EdgeState::Out);
        assert_eq!(label.get(Side::Bottom), EdgeState::In);
        assert_eq!(label.get(Side::Left), EdgeState::Flat);
        assert_eq!(label.flat_count(), 2);
        assert!(label.is_corner());
    }

    #[test]
    fn test_bits_put_top_in_most_significant_position() {
        use EdgeState::*;
        assert_eq!(PieceLabel::new(Out, In, In, In).bits(), 0b1000);
        assert_eq!(PieceLabel::new(In, Out, In, In).bits(), 0b0100);
        assert_eq!(PieceLabel::new(In, In, Out, In).bits(), 0b0010);
        assert_eq!(PieceLabel::new(In, In, In, Out).bits(), 0b0001);
        assert_eq!(PieceLabel::FLAT.bits(), 0);
    }

    #[test]
    fn test_class_name_and_code() {
        use EdgeState::*;
        let label = PieceLabel::new(Flat, Out, In, Out);
        assert_eq!(label.class_name(), "piece_1101");
        assert_eq!(label.code(), "-OIO");
        assert_eq!(PieceLabel::FLAT.class_name(), "piece_1111");
        assert_eq!(PieceLabel::new(In, Out, In, In).class_name(), "piece_0001");
        assert_eq!(PieceLabel::new(In, In, In, Out).class_name(), "piece_0100");
    }
}
