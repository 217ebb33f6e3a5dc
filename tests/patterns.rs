#[cfg(test)]
mod tests {
    use life_editor::{Board, CellStatus};
    use rand::SeedableRng;

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn parse(rows: &[&str]) -> Board {
        let mut board = Board::blank(rows[0].len(), rows.len()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                board.set_status(x, y, (c == '#').into());
            }
        }
        board
    }

    fn picture(board: &Board) -> Vec<String> {
        let (w, h) = board.size();
        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| match board.status(x, y) {
                        CellStatus::Alive => '#',
                        CellStatus::Dead => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn step(board: &mut Board, n: usize) {
        for _ in 0..n {
            board.compute_next();
            board.commit(|_, _, _| {});
        }
    }

    /// Reference update that builds a whole new vector per generation.
    fn naive_step(cells: &[bool], w: usize, h: usize) -> Vec<bool> {
        let get = |x: isize, y: isize| {
            let x = x.rem_euclid(w as isize) as usize;
            let y = y.rem_euclid(h as isize) as usize;
            cells[x + y * w] as usize
        };
        let mut next = vec![false; w * h];
        for y in 0..h as isize {
            for x in 0..w as isize {
                let neibs = get(x - 1, y - 1)
                    + get(x, y - 1)
                    + get(x + 1, y - 1)
                    + get(x - 1, y)
                    + get(x + 1, y)
                    + get(x - 1, y + 1)
                    + get(x, y + 1)
                    + get(x + 1, y + 1);
                let alive = cells[x as usize + y as usize * w];
                next[x as usize + y as usize * w] = if alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        next
    }

    #[test]
    fn test_oscillators_return_after_their_period() {
        let cases: [(&[&str], usize); 2] = [
            (
                &[
                    "......", //
                    ".##...",
                    ".##...",
                    "...##.",
                    "...##.",
                    "......",
                ],
                2,
            ),
            (
                &[
                    "......", //
                    "......",
                    "..###.",
                    ".###..",
                    "......",
                    "......",
                ],
                2,
            ),
        ];
        for (rows, period) in cases {
            let mut board = parse(rows);
            let start = picture(&board);
            step(&mut board, 1);
            assert_ne!(picture(&board), start);
            step(&mut board, period - 1);
            assert_eq!(picture(&board), start);
        }
    }

    #[test]
    fn test_glider_wraps_around_the_torus() {
        let mut board = parse(&[
            ".#......", //
            "..#.....",
            "###.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let start = picture(&board);
        // 8 cells diagonally at one cell per 4 generations
        step(&mut board, 16);
        assert_eq!(
            picture(&board),
            [
                "........",
                "........",
                "........",
                "........",
                ".....#..",
                "......#.",
                "....###.",
                "........",
            ]
        );
        step(&mut board, 16);
        assert_eq!(picture(&board), start);
    }

    #[test]
    fn test_consistency_with_naive_update() {
        const W: usize = 48;
        const H: usize = 32;

        let mut board = Board::blank(W, H).unwrap();
        board.randomize(&mut rand_chacha::ChaCha8Rng::seed_from_u64(SEED), FILL_RATE);
        let mut cells: Vec<bool> = board.iter().map(|(_, _, s)| s.is_alive()).collect();

        for generation in 0..50 {
            step(&mut board, 1);
            cells = naive_step(&cells, W, H);
            let actual: Vec<bool> = board.iter().map(|(_, _, s)| s.is_alive()).collect();
            assert_eq!(actual, cells, "generation {generation}");
        }
    }
}
