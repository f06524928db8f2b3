//! End-to-end games played through the public API

use grid_snake::game::{Apple, Cell, Direction, Game, GameConfig, Snake, TickOutcome};
use grid_snake::input::KeyAction;
use grid_snake::render::{Canvas, Surface};
use rand::{Rng, SeedableRng, distributions::Standard, rngs::StdRng};

fn game(snake: Snake, apple: Cell, seed: u64) -> Game<StdRng> {
    Game::from_parts(
        GameConfig::default(),
        snake,
        Apple::new(apple),
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn eats_apple_in_the_middle_of_the_arena() {
    let mut game = game(
        Snake::new(Cell::new(320, 260), Direction::Up),
        Cell::new(320, 240),
        1,
    );

    assert_eq!(game.update(), TickOutcome::Running);

    assert_eq!(game.snake().len(), 2);
    assert_eq!(game.snake().head(), Cell::new(320, 240));
    assert!(game.grid().contains(game.apple().position));
}

#[test]
fn wraps_across_the_left_edge() {
    let mut game = game(
        Snake::new(Cell::new(0, 240), Direction::Left),
        Cell::new(0, 0),
        2,
    );

    game.update();
    assert_eq!(game.snake().body, vec![Cell::new(620, 240)]);
}

#[test]
fn full_lap_returns_to_start() {
    let start = Cell::new(320, 240);
    let mut game = game(Snake::new(start, Direction::Down), Cell::new(0, 0), 3);

    for _ in 0..game.grid().rows() {
        assert_eq!(game.update(), TickOutcome::Running);
    }
    assert_eq!(game.snake().head(), start);
}

#[test]
fn random_play_keeps_invariants_until_collision() {
    for seed in 0..20 {
        let mut game = Game::with_rng(GameConfig::small(), StdRng::seed_from_u64(seed));
        let mut turns = StdRng::seed_from_u64(seed + 100);
        let mut length = game.snake().len();

        for _ in 0..2000 {
            let direction: Direction = turns.sample(Standard);
            game.handle_action(KeyAction::Turn(direction));

            let outcome = game.update();
            if outcome == TickOutcome::CollisionEnded {
                assert!(!game.is_alive());
                assert_eq!(game.update(), TickOutcome::CollisionEnded);
                break;
            }

            let snake = game.snake();
            assert!(snake.body.iter().all(|cell| game.grid().contains(*cell)));
            assert!(snake.len() == length || snake.len() == length + 1);
            length = snake.len();
        }
    }
}

#[test]
fn draws_into_a_canvas() {
    let config = GameConfig::default();
    let mut game = game(
        Snake::new(Cell::new(320, 240), Direction::Right),
        Cell::new(0, 0),
        4,
    );
    let mut canvas = Canvas::new(*game.grid(), config.palette.background);

    game.update();
    canvas.fill(config.palette.apple);
    game.draw(&mut canvas);

    let head = canvas.tile(17, 12).unwrap();
    assert_eq!(head.fill, config.palette.snake);
    assert_eq!(head.border, Some(config.palette.border));

    let vacated = canvas.tile(16, 12).unwrap();
    assert_eq!(vacated.fill, config.palette.background);
    assert_eq!(vacated.border, None);

    let apple = canvas.tile(0, 0).unwrap();
    assert_eq!(apple.fill, config.palette.apple);
}
