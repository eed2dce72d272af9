// tests/sweep_traversal.rs
use glam::IVec2;
use grid_sweeper::{
    BoustrophedonSweep, Cell, CleaningStrategy, Grid, NullRenderer, Robot, StrategyKind, SweepPath,
};

/// Runs a full sweep and returns every position the robot rendered at.
fn sweep_positions(grid: &mut Grid) -> Vec<IVec2> {
    let mut visited = Vec::new();
    let mut record = |_: &Grid, p: IVec2| visited.push(p);
    {
        let mut robot = Robot::new(grid, &BoustrophedonSweep, &mut record);
        robot.start_cleaning();
    }
    visited
}

#[test]
fn test_sweep_path_is_serpentine() {
    let path: Vec<IVec2> = SweepPath::new(3, 3).collect();

    #[rustfmt::skip]
    let expected = [
        (0, 0), (1, 0), (2, 0),
        (2, 1), (1, 1), (0, 1),
        (0, 2), (1, 2), (2, 2),
    ]
    .map(|(x, y)| IVec2::new(x, y));
    assert_eq!(path, expected);
}

#[test]
fn test_sweep_path_length_and_adjacency() {
    let path = SweepPath::new(7, 4);
    assert_eq!(path.len(), 28);

    let cells: Vec<IVec2> = path.collect();
    for pair in cells.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        assert_eq!(step.x + step.y, 1, "No jump between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn test_sweep_path_degenerate_sizes() {
    assert_eq!(SweepPath::new(0, 5).count(), 0);
    assert_eq!(SweepPath::new(5, 0).count(), 0);

    let column: Vec<IVec2> = SweepPath::new(1, 3).collect();
    assert_eq!(column, vec![IVec2::new(0, 0), IVec2::new(0, 1), IVec2::new(0, 2)]);
}

#[test]
fn test_sweep_path_coordinates_stay_in_i32() {
    let mut path = SweepPath::new(usize::MAX, 2);
    assert_eq!(path.next(), Some(IVec2::new(0, 0)));
    assert_eq!(path.next(), Some(IVec2::new(1, 0)));

    // Row 1 starts at the clamped right edge, not at a wrapped negative x.
    let mut path = SweepPath::new(usize::MAX, 2).skip(Grid::MAX_DIMENSION);
    assert_eq!(path.next(), Some(IVec2::new(i32::MAX - 1, 1)));
}

#[test]
fn test_robot_follows_sweep_order() {
    let mut grid = Grid::new(5, 4);
    let visited = sweep_positions(&mut grid);

    // Empty grid: every move succeeds and nothing is cleaned, so each frame is one move.
    let expected: Vec<IVec2> = SweepPath::new(5, 4).collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_move_attempts_equal_cell_count() {
    let mut grid = Grid::new(6, 5);
    grid.add_obstacle(3, 0);
    grid.add_obstacle(5, 4);
    let mut renderer = NullRenderer;
    let mut robot = Robot::new(&mut grid, &BoustrophedonSweep, &mut renderer);

    robot.start_cleaning();

    let stats = robot.stats();
    assert_eq!(stats.move_attempts, 30);
    assert_eq!(stats.blocked_moves, 2);
    assert_eq!(stats.moves, 28);
    // Row 4 is even so the sweep ends at (5, 4), which is blocked: the robot stops one short.
    assert_eq!(robot.position(), IVec2::new(4, 4));
}

#[test]
fn test_obstacles_are_skipped_not_visited() {
    let mut grid = Grid::new(4, 2);
    grid.add_obstacle(2, 0);
    grid.add_dirt(1, 0);
    grid.add_dirt(3, 0);
    let visited = sweep_positions(&mut grid);

    assert!(!visited.contains(&IVec2::new(2, 0)));
    assert_eq!(grid.cell(2, 0), Some(Cell::Obstacle));
    assert_eq!(grid.cell(1, 0), Some(Cell::Cleaned));
    assert_eq!(grid.cell(3, 0), Some(Cell::Cleaned));
    assert!(grid.is_clean());
}

#[test]
fn test_second_sweep_changes_nothing() {
    let mut grid = Grid::new(5, 3);
    grid.add_dirt(4, 0);
    grid.add_dirt(2, 2);
    grid.add_obstacle(1, 1);
    let mut renderer = NullRenderer;
    let mut robot = Robot::new(&mut grid, &BoustrophedonSweep, &mut renderer);

    robot.start_cleaning();
    let after_first = robot.grid().clone();
    let cleaned_first = robot.stats().cells_cleaned;
    robot.start_cleaning();

    assert_eq!(robot.grid(), &after_first);
    assert_eq!(robot.stats().cells_cleaned, cleaned_first);
    assert_eq!(robot.stats().move_attempts, 30);
}

#[test]
fn test_strategy_kind_selects_sweep() {
    let strategy = StrategyKind::default().strategy();
    assert_eq!(strategy.name(), "boustrophedon");

    let mut grid = Grid::new(3, 2);
    grid.add_dirt(0, 1);
    let mut renderer = NullRenderer;
    let mut robot = Robot::new(&mut grid, strategy.as_ref(), &mut renderer);
    robot.start_cleaning();

    assert_eq!(robot.position(), IVec2::new(0, 1));
    assert!(robot.grid().is_clean());
}

/// A strategy that only visits the diagonal, to exercise the extension point.
struct Diagonal;

impl CleaningStrategy for Diagonal {
    fn name(&self) -> &str {
        "diagonal"
    }

    fn clean(&self, robot: &mut Robot<'_>) {
        let n = robot.grid().width().min(robot.grid().height()) as i32;
        for i in 0..n {
            robot.move_to(i, i);
            robot.clean_current_spot();
        }
    }
}

#[test]
fn test_custom_strategy() {
    let mut grid = Grid::new(3, 3);
    grid.add_dirt(1, 1);
    grid.add_dirt(2, 0);
    let mut renderer = NullRenderer;
    let mut robot = Robot::new(&mut grid, &Diagonal, &mut renderer);
    robot.start_cleaning();

    assert_eq!(robot.position(), IVec2::new(2, 2));
    assert_eq!(robot.stats().move_attempts, 3);
    assert_eq!(robot.grid().cell(1, 1), Some(Cell::Cleaned));
    assert_eq!(robot.grid().cell(2, 0), Some(Cell::Dirt));
}
