use gridpath_core::{Grid, NodeType, Position, manhattan};
use gridpath_search::{Algorithm, Pathfinder, SearchResult, run_search};

fn assert_well_formed(grid: &Grid, path: &[Position]) {
    let (start, end) = gridpath_search::require_endpoints(grid).unwrap();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
    }
    let mut sorted = path.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), path.len(), "path repeats a cell");
}

#[test]
fn open_three_by_three() {
    for algorithm in Algorithm::ALL {
        let mut g = Grid::parse("S..\n...\n..E").unwrap();
        let result = run_search(&mut g, algorithm).unwrap();
        assert_well_formed(&g, result.path());
        if algorithm.is_optimal() {
            assert_eq!(result.path().len(), 5, "{algorithm}");
            // Manhattan-monotone: every step gets closer to the end.
            for pair in result.path().windows(2) {
                let end = Position::new(2, 2);
                assert_eq!(manhattan(pair[1], end), manhattan(pair[0], end) - 1);
            }
        }
    }
}

#[test]
fn wall_column_forces_detour() {
    for algorithm in Algorithm::ALL {
        let mut g = Grid::parse("S..\n.#.\n.#E").unwrap();
        let result = run_search(&mut g, algorithm).unwrap();
        let path = result.path();
        assert_well_formed(&g, path);
        assert!(path.contains(&Position::new(0, 1)), "{algorithm}");
        assert!(result.moves() <= 8, "{algorithm}");
        if algorithm.is_optimal() {
            assert_eq!(result.moves(), 4, "{algorithm}");
        }
    }
}

#[test]
fn wall_ring_is_not_found() {
    let map = "\
        S....
        .###.
        .#E#.
        .###.
        .....";
    for algorithm in Algorithm::ALL {
        let mut g = Grid::parse(map).unwrap();
        let mut pf = Pathfinder::default();
        let result = pf.run(&mut g, algorithm).unwrap();
        assert_eq!(result, SearchResult::NotFound, "{algorithm}");
        assert!(result.path().is_empty());
        // Every open cell outside the ring was explored, nothing inside it.
        assert_eq!(pf.visited().len(), 15, "{algorithm}");
        assert_eq!(g.count(NodeType::Visited), 15, "{algorithm}");
        assert_eq!(g.count(NodeType::Wall), 8, "{algorithm}");
        assert_eq!(g.count(NodeType::Path), 0, "{algorithm}");
    }
}

#[test]
fn walls_are_never_marked() {
    let map = "\
        S.#....
        .##.##.
        ...#...
        .#...#E";
    for algorithm in Algorithm::ALL {
        let mut g = Grid::parse(map).unwrap();
        let walls = g.positions_of(NodeType::Wall);
        let mut pf = Pathfinder::default();
        let result = pf.run(&mut g, algorithm).unwrap();
        assert!(result.is_found(), "{algorithm}");
        assert_eq!(g.positions_of(NodeType::Wall), walls, "{algorithm}");
        for p in pf.visited() {
            assert!(!walls.contains(p), "{algorithm} visited wall {p}");
        }
        for p in result.path() {
            assert!(!walls.contains(p), "{algorithm} walked through {p}");
        }
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let map = "\
        ..#....
        S.#.##.
        .......
        .##.#.E";
    for algorithm in Algorithm::ALL {
        let mut a = Grid::parse(map).unwrap();
        let mut b = Grid::parse(map).unwrap();
        let ra = run_search(&mut a, algorithm).unwrap();
        let rb = run_search(&mut b, algorithm).unwrap();
        assert_eq!(ra, rb, "{algorithm}");
        assert_eq!(a, b, "{algorithm}");
    }
}

#[test]
fn endpoints_survive_painting() {
    for algorithm in Algorithm::ALL {
        let mut g = Grid::parse(".S.\n...\n.E.").unwrap();
        run_search(&mut g, algorithm).unwrap();
        assert_eq!(g.kind(Position::new(0, 1)), Some(NodeType::Start));
        assert_eq!(g.kind(Position::new(2, 1)), Some(NodeType::End));
        assert_eq!(g.count(NodeType::Start), 1);
        assert_eq!(g.count(NodeType::End), 1);
    }
}

#[test]
fn optimal_strategies_agree_on_length() {
    let map = "\
        S...#.....
        .##.#.###.
        .#..#...#.
        .#.####.#.
        .#......#E";
    let lengths: Vec<_> = Algorithm::ALL
        .into_iter()
        .filter(|a| a.is_optimal())
        .map(|a| {
            let mut g = Grid::parse(map).unwrap();
            run_search(&mut g, a).unwrap().moves()
        })
        .collect();
    assert!(lengths.iter().all(|&l| l == lengths[0]), "{lengths:?}");
}
