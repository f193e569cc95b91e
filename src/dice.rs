// Boggler – A solver for word-search dice puzzles
// Copyright (C) 2026  The Boggler authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use rand::Rng;
use rand::seq::SliceRandom;
use super::board::Board;
use super::face::Face::{self, *};

pub type Die = [Face; 6];

pub const N_DICE: usize = 16;

pub static DICE: [Die; N_DICE] = [
    [A, A, E, E, G, N],
    [E, L, R, T, T, Y],
    [A, O, O, T, T, W],
    [A, B, B, J, O, O],
    [E, H, R, T, V, W],
    [C, I, M, O, T, U],
    [D, I, S, T, T, Y],
    [E, I, O, S, S, T],
    [D, E, L, R, V, Y],
    [A, C, H, O, P, S],
    [H, I, M, N, Qu, U],
    [E, E, I, N, S, U],
    [E, E, G, H, N, W],
    [A, F, F, K, P, S],
    [H, L, N, N, R, Z],
    [D, E, I, L, R, X],
];

/// Picks `count` dice. Each die is taken at most once until the whole
/// set has been used, and then the set is started again.
pub fn choose_dice<R: Rng>(count: usize, rng: &mut R) -> Vec<&'static Die> {
    let mut dice = Vec::with_capacity(count);
    let mut pool = Vec::<&Die>::with_capacity(N_DICE);

    while dice.len() < count {
        if pool.is_empty() {
            pool.extend(DICE.iter());
            pool.shuffle(rng);
        }

        if let Some(die) = pool.pop() {
            dice.push(die);
        }
    }

    dice
}

pub fn roll_die<R: Rng>(die: &Die, rng: &mut R) -> Face {
    die[rng.gen_range(0..die.len())]
}

pub fn roll_board<R: Rng>(width: usize, height: usize, rng: &mut R) -> Board {
    let faces = choose_dice(width * height, rng)
        .into_iter()
        .map(|die| roll_die(die, rng))
        .collect::<Vec<Face>>();

    let rows = faces.chunks(width.max(1)).collect::<Vec<&[Face]>>();

    Board::from_rows(&rows)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dice_are_spread_evenly() {
        let mut rng = StdRng::seed_from_u64(42);

        for count in [0, 5, 16, 25, 32, 40] {
            let dice = choose_dice(count, &mut rng);

            assert_eq!(dice.len(), count);

            for die in DICE.iter() {
                let uses = dice.iter()
                    .filter(|chosen| std::ptr::eq(**chosen, die))
                    .count();

                assert!(uses >= count / N_DICE);
                assert!(uses <= (count + N_DICE - 1) / N_DICE);
            }
        }
    }

    #[test]
    fn rolled_face_is_on_the_die() {
        let mut rng = StdRng::seed_from_u64(7);

        for die in DICE.iter() {
            for _ in 0..20 {
                assert!(die.contains(&roll_die(die, &mut rng)));
            }
        }
    }

    #[test]
    fn board_size() {
        let mut rng = StdRng::seed_from_u64(1);

        let board = roll_board(5, 3, &mut rng);

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert_eq!(board.cells().len(), 15);
        assert!(board.cells().iter().all(|cell| {
            DICE.iter().any(|die| die.contains(&cell.face))
        }));
    }

    #[test]
    fn seeded_boards_repeat() {
        let a = roll_board(4, 4, &mut StdRng::seed_from_u64(99));
        let b = roll_board(4, 4, &mut StdRng::seed_from_u64(99));

        assert_eq!(a.to_string(), b.to_string());
    }
}
