use plum_lobby::utils::long_algebraic::long_algebraic_to_move;
use plum_lobby::{ChessErrors, Game, GameStatus, InvalidMoveReason, Move, PieceType, Position, TeamColor};

fn at(row: i8, column: i8) -> Position {
    Position::new(row, column)
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = long_algebraic_to_move(text).expect("move text should parse");
        game.make_move(mv)
            .unwrap_or_else(|err| panic!("{text} should be legal: {err}"));
    }
}

#[test]
fn pawn_double_push_passes_the_turn() {
    let mut game = Game::new_game();
    game.make_move(Move::new(at(2, 5), at(4, 5), None))
        .expect("e2e4 should be legal");

    assert_eq!(game.team_turn(), TeamColor::Black);
    let pawn = game.board().get_piece(at(4, 5)).expect("pawn should be on e4");
    assert!(pawn.is(TeamColor::White, PieceType::Pawn));
    assert!(pawn.has_moved);
    assert!(pawn.just_double_moved);
    assert_eq!(game.board().get_piece(at(2, 5)), None);
}

#[test]
fn black_cannot_move_first() {
    let mut game = Game::new_game();
    let before = game.clone();

    let err = game
        .make_move(Move::new(at(8, 5), at(7, 5), None))
        .expect_err("black moving first should fail");
    assert_eq!(
        err,
        ChessErrors::InvalidMove(InvalidMoveReason::NotYourTurn {
            piece: TeamColor::Black,
            turn: TeamColor::White,
        })
    );
    assert_eq!(game, before);
}

#[test]
fn failed_moves_never_change_the_game() {
    let mut game = Game::new_game();
    play(&mut game, &["e2e4", "d7d5"]);
    let before = game.clone();

    for bad in [
        Move::new(at(4, 4), at(3, 4), None),
        Move::new(at(1, 5), at(3, 5), None),
        Move::new(at(1, 4), at(4, 4), None),
        Move::new(at(4, 5), at(6, 5), None),
    ] {
        let err = game.make_move(bad).expect_err("move should be rejected");
        assert!(err.is_invalid_move(), "{bad} gave {err}");
        assert_eq!(game, before);
    }
}

#[test]
fn rook_on_the_first_rank_checks_the_king() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
    assert!(game.is_in_check(TeamColor::White));
    assert!(!game.is_in_check(TeamColor::Black));
    assert_eq!(game.game_status(), GameStatus::Check(TeamColor::White));
}

#[test]
fn castling_moves_king_and_rook_together() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

    let king_moves = game.valid_moves(at(1, 5)).expect("king is on e1");
    let kingside = king_moves
        .iter()
        .find(|mv| mv.end == at(1, 7))
        .expect("kingside castle should be offered");
    assert!(kingside.is_castle);
    assert!(king_moves.iter().any(|mv| mv.end == at(1, 3) && mv.is_castle));

    // submitted without the castle flag; make_move uses the legal copy
    game.make_move(Move::new(at(1, 5), at(1, 7), None))
        .expect("castling should be legal");
    assert!(game.board().get_piece(at(1, 7)).is_some_and(|p| p.is(TeamColor::White, PieceType::King)));
    assert!(game.board().get_piece(at(1, 6)).is_some_and(|p| p.is(TeamColor::White, PieceType::Rook)));
    assert_eq!(game.board().get_piece(at(1, 8)), None);
    assert_eq!(game.board().get_piece(at(1, 5)), None);

    game.make_move(Move::new(at(8, 5), at(8, 3), None))
        .expect("black queenside castle should be legal");
    assert!(game.board().get_piece(at(8, 3)).is_some_and(|p| p.is(TeamColor::Black, PieceType::King)));
    assert!(game.board().get_piece(at(8, 4)).is_some_and(|p| p.is(TeamColor::Black, PieceType::Rook)));
    assert_eq!(game.board().get_piece(at(8, 1)), None);
}

#[test]
fn castling_rights_vanish_once_the_rook_moves() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
    play(&mut game, &["h1h2", "a8a7", "h2h1", "a7a8"]);

    let king_moves = game.valid_moves(at(1, 5)).expect("king is on e1");
    assert!(!king_moves.iter().any(|mv| mv.end == at(1, 7)));
    assert!(king_moves.iter().any(|mv| mv.end == at(1, 3)));
}

#[test]
fn en_passant_captures_the_passed_pawn() {
    let mut game = Game::new_game();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    let pawn_moves = game.valid_moves(at(5, 5)).expect("pawn is on e5");
    let capture = pawn_moves
        .iter()
        .find(|mv| mv.end == at(6, 4))
        .expect("en passant should be offered");
    assert!(capture.is_en_passant);

    game.make_move(Move::new(at(5, 5), at(6, 4), None))
        .expect("en passant should be legal");
    assert_eq!(game.board().get_piece(at(5, 4)), None);
    assert!(game.board().get_piece(at(6, 4)).is_some_and(|p| p.is(TeamColor::White, PieceType::Pawn)));
    assert_eq!(game.board().count(TeamColor::Black, PieceType::Pawn), 7);
}

#[test]
fn en_passant_window_closes_after_one_ply() {
    let mut game = Game::new_game();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);

    let pawn_moves = game.valid_moves(at(5, 5)).expect("pawn is on e5");
    assert!(!pawn_moves.iter().any(|mv| mv.is_en_passant));
    assert!(game.board().occupied().all(|(_, piece)| !piece.just_double_moved));
}

#[test]
fn promotion_replaces_the_pawn() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

    let promotions = game.valid_moves(at(7, 1)).expect("pawn is on a7");
    assert_eq!(promotions.len(), 4);
    assert!(promotions.iter().all(|mv| mv.promotion.is_some()));

    let err = game
        .make_move(Move::new(at(7, 1), at(8, 1), None))
        .expect_err("a pawn must choose a promotion");
    assert!(err.is_invalid_move());

    game.make_move(Move::new(at(7, 1), at(8, 1), Some(PieceType::Knight)))
        .expect("underpromotion should be legal");
    assert!(game.board().get_piece(at(8, 1)).is_some_and(|p| p.is(TeamColor::White, PieceType::Knight)));
}

#[test]
fn lone_king_in_check_with_no_flight_is_mated() {
    for fen in [
        "7k/6Q1/6K1/8/8/8/8/8 b - - 0 1",
        "R6k/8/7K/8/8/8/8/8 b - - 0 1",
    ] {
        let game = Game::from_fen(fen).expect("FEN should parse");
        assert!(game.is_in_checkmate(TeamColor::Black), "{fen} should be mate");
        assert!(!game.is_in_stalemate(TeamColor::Black));
    }
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut game = Game::new_game();
    play(&mut game, &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);
    assert_eq!(game.game_status(), GameStatus::Checkmate(TeamColor::Black));
    assert!(game.all_valid_moves(TeamColor::Black).is_empty());
}
