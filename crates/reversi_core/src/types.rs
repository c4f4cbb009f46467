use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value a disc of this player occupies.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// One of the eight unit steps around a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    /// All directions in scan order: row-major around the centre, skipping (0, 0).
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }
}

/// A disc placement at (row, col). Row 0 is the top of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: u8, // 0..8
    pub col: u8, // 0..8
}

impl Move {
    /// Builds a move without bounds checking; use [`Move::try_new`] for untrusted input.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Row-major index in 0..64.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::try_new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// The neighbouring cell in `dir`, or `None` off the board.
    pub fn step(self, dir: Direction) -> Option<Move> {
        let r = i16::from(self.row) + i16::from(dir.dr);
        let c = i16::from(self.col) + i16::from(dir.dc);
        if (0..BOARD_SIZE as i16).contains(&r) && (0..BOARD_SIZE as i16).contains(&c) {
            Some(Move::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE as u8).flat_map(|r| (0..BOARD_SIZE as u8).map(move |c| Move::new(r, c)))
    }
}

/// Algebraic coordinate: column letter then row number, so (2, 3) is "d3".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + self.row) as char;
        write!(f, "{file}{rank}")
    }
}

pub fn coord_to_move(c: &str) -> Option<Move> {
    let b = c.trim().as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some(Move::new(r - b'1', f - b'a'))
}

/// Disc counts per colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiscCounts {
    pub black: u32,
    pub white: u32,
}

impl DiscCounts {
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}
