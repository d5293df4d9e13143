//! Distributed-variant tests with in-process follower stand-ins.

mod common;

use bhumi_route::{
    Cell, CellStatus, Error, FollowerLink, FollowerState, LocalFollowerLink, MasterCoordinator,
    RelaxationEngine, RoundRequest, RoundResponse, TerrainField,
};
use common::{all_cells, field_with_obstacles, sloped_field};

fn local_links(field: &TerrainField, count: usize, dest: Cell) -> Vec<Box<dyn FollowerLink>> {
    let (rows, cols) = field.bounds();
    (0..count)
        .map(|index| {
            let state = FollowerState::new(rows, cols, count, index, dest).unwrap();
            Box::new(LocalFollowerLink::new(state)) as Box<dyn FollowerLink>
        })
        .collect()
}

#[test]
fn distributed_search_matches_the_local_engine() {
    let mut heights = vec![0.0; 49];
    // A ridge through the middle of the grid.
    for col in 0..7 {
        heights[3 * 7 + col] = 2.0;
    }
    let field = sloped_field(7, 7, &heights);
    let source = Cell::new(0, 3);
    let dest = Cell::new(6, 3);

    let local = RelaxationEngine::new(&field, 3).run(source, dest).unwrap();
    let mut master = MasterCoordinator::new(&field, local_links(&field, 3, dest)).unwrap();
    let distributed = master.run(source, dest).unwrap();

    assert!(local.reached && distributed.reached);
    // The protocol is deterministic: both variants settle the same cells
    // at the same distances.
    for cell in all_cells(7, 7) {
        match (local.distances.status(cell), distributed.distances.status(cell)) {
            (CellStatus::Settled(a), CellStatus::Settled(b)) => {
                assert_eq!(a, b, "distance mismatch at {cell}")
            }
            (CellStatus::Settled(_), other) | (other, CellStatus::Settled(_)) => {
                panic!("settled-set mismatch at {cell}: {other:?}")
            }
            _ => {}
        }
    }
}

#[test]
fn distributed_search_routes_around_obstacles() {
    let field = field_with_obstacles(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let source = Cell::new(2, 4);
    let dest = Cell::new(2, 0);

    let mut master = MasterCoordinator::new(&field, local_links(&field, 2, dest)).unwrap();
    let report = master.run(source, dest).unwrap();
    assert!(report.reached);

    let engine = RelaxationEngine::new(&field, 2).run(source, dest).unwrap();
    assert_eq!(
        report.distances.distance(source),
        engine.distances.distance(source)
    );
}

#[test]
fn distributed_search_reports_unreachable_endpoints() {
    let field = field_with_obstacles(3, 3, &[(0, 1), (1, 1), (2, 1)]);
    let dest = Cell::new(0, 0);
    let mut master = MasterCoordinator::new(&field, local_links(&field, 2, dest)).unwrap();
    let report = master.run(Cell::new(0, 2), dest).unwrap();
    assert!(!report.reached);
    assert_eq!(report.distances.distance(Cell::new(0, 2)), None);
}

#[test]
fn master_requires_at_least_one_follower() {
    let field = common::flat_field(3, 3);
    assert!(matches!(
        MasterCoordinator::new(&field, Vec::new()),
        Err(Error::Config(_))
    ));
}

/// Link that fails after a fixed number of healthy rounds.
struct FlakyLink {
    inner: LocalFollowerLink,
    healthy_rounds: usize,
}

impl FollowerLink for FlakyLink {
    fn exchange(&mut self, request: &RoundRequest) -> bhumi_route::Result<RoundResponse> {
        if self.healthy_rounds == 0 {
            return Err(Error::Timeout);
        }
        self.healthy_rounds -= 1;
        self.inner.exchange(request)
    }
}

#[test]
fn transport_failure_aborts_the_whole_search() {
    let field = common::flat_field(6, 6);
    let dest = Cell::new(5, 5);
    let (rows, cols) = field.bounds();

    let links: Vec<Box<dyn FollowerLink>> = vec![
        Box::new(LocalFollowerLink::new(
            FollowerState::new(rows, cols, 2, 0, dest).unwrap(),
        )),
        Box::new(FlakyLink {
            inner: LocalFollowerLink::new(FollowerState::new(rows, cols, 2, 1, dest).unwrap()),
            healthy_rounds: 3,
        }),
    ];
    let mut master = MasterCoordinator::new(&field, links).unwrap();
    let err = master.run(Cell::new(0, 0), dest).unwrap_err();
    assert!(matches!(err, Error::Timeout));
}

/// Link that answers with a cell the master never announced.
struct RogueLink;

impl FollowerLink for RogueLink {
    fn exchange(&mut self, _request: &RoundRequest) -> bhumi_route::Result<RoundResponse> {
        Ok(RoundResponse {
            candidate: Some(Cell::new(0, 0)),
        })
    }
}

#[test]
fn inconsistent_follower_answers_are_a_protocol_error() {
    let field = common::flat_field(4, 4);
    let dest = Cell::new(3, 3);
    let links: Vec<Box<dyn FollowerLink>> = vec![Box::new(RogueLink)];
    let mut master = MasterCoordinator::new(&field, links).unwrap();
    // (0, 0) is unreached on round one, so the candidate is inconsistent.
    let err = master.run(Cell::new(1, 1), dest).unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}
