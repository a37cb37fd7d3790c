use othello::cpu::{MoveSelector, RandomMoveSelector};
use othello::{Color, Game, Inbound, Message, Move, Position, Session, Turn};

struct Peer {
    game: Game,
    session: Session,
}

impl Peer {
    fn joined(color: Color) -> Self {
        let mut game = Game::new();
        let mut session = Session::new();
        let start = Message::Start { color }.encode().unwrap();
        session.receive(&mut game, &start).unwrap();
        Peer { game, session }
    }
}

#[test]
fn two_peers_stay_in_lockstep_for_whole_random_games() {
    for seed in 0..20 {
        let mut black = Peer::joined(Color::Black);
        let mut white = Peer::joined(Color::White);
        let mut selector = RandomMoveSelector::new(Some(seed));

        while !black.game.is_terminal() {
            let (mover, other) = if black.session.is_local_turn(&black.game) {
                (&mut black, &mut white)
            } else {
                (&mut white, &mut black)
            };
            assert!(mover.session.is_local_turn(&mover.game));
            assert!(!other.session.is_local_turn(&other.game));

            let pos = selector.select_move(&mover.game.legal_moves()).unwrap();
            let (turn, frame) = mover.session.commit_local(&mut mover.game, pos).unwrap();
            let inbound = other.session.receive(&mut other.game, &frame).unwrap();

            assert_eq!(inbound, Inbound::PeerMoved { pos, turn });
            assert_eq!(black.game.board(), white.game.board());
            assert_eq!(black.game.active(), white.game.active());
            assert_eq!(
                black.game.board().fingerprint(),
                white.game.board().fingerprint()
            );
        }

        assert!(white.game.is_terminal());
        assert_eq!(black.game.result(), white.game.result());
    }
}

#[test]
fn replayed_move_matches_direct_application() {
    let mut direct = Game::new();
    let mut replica = Game::new();
    let mut session = Session::with_color(Color::White);

    let pos = Position::new(2, 3).unwrap();
    direct.apply_move(Move::new(pos, Color::Black)).unwrap();
    let frame = Message::Move { x: pos.x, y: pos.y }.encode().unwrap();
    session.receive(&mut replica, &frame).unwrap();

    assert_eq!(direct.board(), replica.board());
    assert_eq!(direct.active(), replica.active());
    assert_eq!(direct.last_flipped(), replica.last_flipped());
}

#[test]
fn count_changes_by_one_plus_flips_every_move() {
    let mut game = Game::new();
    let mut selector = RandomMoveSelector::new(Some(99));

    while !game.is_terminal() {
        let before = *game.board();
        let color = game.active();
        let pos = selector.select_move(&game.legal_moves()).unwrap();

        let turn = game.apply_move(Move::new(pos, color)).unwrap();
        let after = *game.board();

        let changed = Position::all()
            .filter(|&p| before.get(p) != after.get(p))
            .count();
        assert_eq!(changed, 1 + game.last_flipped().len());

        let (b0, w0) = before.count();
        let (b1, w1) = after.count();
        assert_eq!(b1 + w1, b0 + w0 + 1);

        if let Turn::Pass { skipped } = turn {
            assert_eq!(skipped, color.opposite());
            assert_eq!(game.active(), color);
            assert!(!game.legal_moves().is_empty());
        }
    }
}
