use crate::common::Player;

/// Board edge length. The rules are defined for the classic 8×8 grid only.
pub const BOARD_SIZE: usize = 8;

/// The four center discs every game starts from.
pub const INITIAL_DISCS: [(usize, usize, Player); 4] = [
    (3, 3, Player::One),
    (3, 4, Player::Two),
    (4, 3, Player::Two),
    (4, 4, Player::One),
];

/// The eight scan directions as (row, col) steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
