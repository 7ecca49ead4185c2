//! End-to-end games through the public API.

use connect_four::ai::{AiEngine, Difficulty, Minimax};
use connect_four::error::SessionError;
use connect_four::game::{
    AiSeat, GameSession, GameStatus, MoveError, MoveOutcome, Player, ROWS,
};

#[test]
fn vertical_four_in_column_three() {
    let mut session = GameSession::standard();
    for _ in 0..3 {
        session.attempt_move(3).unwrap();
        session.attempt_move(0).unwrap();
    }
    let outcome = session.attempt_move(3).unwrap();
    assert!(matches!(
        outcome,
        MoveOutcome::Won {
            player: Player::PlayerOne,
            ..
        }
    ));
    assert_eq!(session.status(), GameStatus::Won(Player::PlayerOne));
}

#[test]
fn column_overflow_is_rejected() {
    let mut session = GameSession::standard();
    for _ in 0..ROWS {
        session.attempt_move(4).unwrap();
    }
    let player = session.current_player();
    assert_eq!(session.attempt_move(4), Err(MoveError::ColumnFull));
    assert_eq!(session.current_player(), player);
}

#[test]
fn medium_ai_takes_center_when_nothing_is_threatened() {
    let mut session = GameSession::standard().with_ai(AiSeat {
        mark: Player::PlayerTwo,
        difficulty: Difficulty::Medium,
    });
    let mut engine = AiEngine::with_seed(1);

    session.attempt_move(3).unwrap();
    session.play_ai_turn(&mut engine).unwrap();
    session.attempt_move(2).unwrap();
    session.play_ai_turn(&mut engine).unwrap();

    let center: Vec<_> = (0..3).map(|row| session.board().get(row, 3)).collect();
    assert_eq!(
        center,
        vec![
            Player::PlayerOne.to_cell(),
            Player::PlayerTwo.to_cell(),
            Player::PlayerTwo.to_cell()
        ]
    );
}

#[test]
fn medium_ai_picks_the_completing_column() {
    let mut session = GameSession::standard().with_ai(AiSeat {
        mark: Player::PlayerTwo,
        difficulty: Difficulty::Medium,
    });
    // Player two's replies are scripted high on column 6
    for (human, reply) in [(4, 6), (5, 6)] {
        session.attempt_move(human).unwrap();
        session.attempt_move(reply).unwrap();
    }
    session.attempt_move(3).unwrap();
    // Player one: (0,3) (0,4) (0,5); (0,2) completes, (0,6) is taken
    let mut engine = AiEngine::with_seed(2);
    session.play_ai_turn(&mut engine).unwrap();
    assert_eq!(session.board().get(0, 2), Player::PlayerTwo.to_cell());
}

#[test]
fn hard_ai_finishes_the_game() {
    let mut session = GameSession::standard();
    // Player one: (0,0) (0,1) (0,2); player two stacked above
    for col in 0..3 {
        session.attempt_move(col).unwrap();
        session.attempt_move(col).unwrap();
    }
    for depth in 1..=4 {
        let mut engine = AiEngine::with_seed(0).with_minimax(Minimax::new(depth));
        let col = engine
            .select_move(session.board(), Player::PlayerOne, Player::PlayerTwo, Difficulty::Hard)
            .unwrap();
        assert_eq!(col, 3, "depth {depth}");
    }
    let mut seated = session.clone().with_ai(AiSeat {
        mark: Player::PlayerOne,
        difficulty: Difficulty::Hard,
    });
    let outcome = seated.play_ai_turn(&mut AiEngine::with_seed(0)).unwrap();
    assert!(matches!(outcome, MoveOutcome::Won { player: Player::PlayerOne, .. }));
}

#[test]
fn human_vs_ai_game_runs_to_completion() {
    let mut session = GameSession::standard().with_ai(AiSeat {
        mark: Player::PlayerTwo,
        difficulty: Difficulty::Hard,
    });
    let mut engine = AiEngine::with_seed(4);
    let mut human = AiEngine::with_seed(5);

    while !session.is_over() {
        if session.is_ai_turn() {
            session.play_ai_turn(&mut engine).unwrap();
        } else {
            let col = human
                .select_move(
                    session.board(),
                    Player::PlayerOne,
                    Player::PlayerTwo,
                    Difficulty::Easy,
                )
                .unwrap();
            session.attempt_move(col).unwrap();
        }
    }

    assert!(matches!(
        session.play_ai_turn(&mut engine),
        Err(SessionError::Move(MoveError::GameOver))
    ));
    assert_eq!(session.attempt_move(0), Err(MoveError::GameOver));

    session.restart();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.board().piece_count(), 0);
    assert!(session.ai_seat().is_some());
}
