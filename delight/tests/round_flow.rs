use delight::{
    card::{Card, CardColor, Rank},
    constants::{COMPUTER_TURN_DELAY, DRAWN_CARD_FOLLOW_UP_DELAY, DRAWN_WILD_AUTO_PLAY_DELAY},
    deck::Deck,
    game::Game,
    player::Seat,
    policy,
    schedule::{ActionKind, ScheduleResult},
    turn::DrawOutcome,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn total_cards(game: &Game) -> usize {
    let in_hands: usize = game.players().iter().map(|player| player.cards_count()).sum();
    in_hands + game.draw_pile().cards_count() + game.discard_pile().cards_count()
}

fn top_color(game: &Game) -> CardColor {
    game.discard_pile()
        .top()
        .color
        .expect("the discard top always has a color")
}

// Plays an injected numeral for the current seat, handing the turn one seat
// along.
fn play_matching_numeral(game: &mut Game, id: u16) {
    let seat = game.current_seat();
    let card = Card::colored(id, top_color(game), Rank::Number(5));
    game.player_mut(seat).hand[0] = card.clone();
    game.play_card(seat, card.id, None).unwrap();
}

#[test]
fn deal_arithmetic_adds_up() {
    let game = Game::with_deck(Deck::full());

    for player in game.players() {
        assert_eq!(player.cards_count(), 7);
    }
    assert_eq!(game.discard_pile().cards_count(), 1);
    assert_eq!(game.draw_pile().cards_count(), 108 - 4 * 7 - 1);
    assert_eq!(total_cards(&game), 108);
    assert_eq!(game.current_seat(), Seat::HUMAN);
}

#[test]
fn every_card_is_conserved_across_a_whole_round() {
    init_tracing();
    let mut game = Game::new();

    // The uniform policy is seat-agnostic, so it can drive every seat.
    for _ in 0..800 {
        if game.winner().is_some() {
            break;
        }
        let seat = game.current_seat();
        policy::take_computer_turn(&mut game, seat).unwrap();

        assert_eq!(total_cards(&game), 108);
        assert!(game.discard_pile().cards_count() >= 1);
    }
}

#[test]
fn drawing_an_unplayable_card_advances_the_turn() {
    // The first draw is random; retry deals until one is unplayable.
    for _ in 0..500 {
        let mut game = Game::new();
        let before = game.player(Seat::HUMAN).cards_count();
        match game.draw_card(Seat::HUMAN).unwrap() {
            DrawOutcome::Kept { .. } => {
                assert_eq!(game.player(Seat::HUMAN).cards_count(), before + 1);
                assert_eq!(game.current_seat().index(), 1);
                return;
            }
            _ => continue,
        }
    }
    panic!("no deal produced an unplayable first draw");
}

#[test]
fn drawing_a_playable_card_keeps_the_turn() {
    for _ in 0..500 {
        let mut game = Game::new();
        match game.draw_card(Seat::HUMAN).unwrap() {
            DrawOutcome::Playable { card } => {
                assert!(game.player(Seat::HUMAN).card_index(card.id).is_some());
                assert_eq!(game.current_seat(), Seat::HUMAN);
                return;
            }
            _ => continue,
        }
    }
    panic!("no deal produced a playable first draw");
}

#[test]
fn empty_draw_pile_is_refilled_from_under_the_discard_top() {
    let mut game = Game::new();

    // Grow the discard pile, then drain the draw pile completely.
    play_matching_numeral(&mut game, 200);
    play_matching_numeral(&mut game, 201);
    play_matching_numeral(&mut game, 202);
    assert_eq!(game.discard_pile().cards_count(), 4);

    while game.draw_pile().cards_count() > 0 {
        game.draw_card(game.current_seat()).unwrap();
    }

    let outcome = game.draw_card(game.current_seat()).unwrap();

    // The three buried cards became the draw pile and one was drawn.
    assert!(!matches!(outcome, DrawOutcome::Exhausted));
    assert_eq!(game.discard_pile().cards_count(), 1);
    assert_eq!(game.draw_pile().cards_count(), 2);
}

#[test]
fn draw_with_both_piles_exhausted_changes_nothing() {
    let mut game = Game::new();

    while game.draw_pile().cards_count() > 0 {
        game.draw_card(game.current_seat()).unwrap();
    }
    assert_eq!(game.discard_pile().cards_count(), 1);

    let seat = game.current_seat();
    let hands_before: Vec<usize> = game
        .players()
        .iter()
        .map(|player| player.cards_count())
        .collect();

    let outcome = game.draw_card(seat).unwrap();

    assert_eq!(outcome, DrawOutcome::Exhausted);
    assert_eq!(game.current_seat(), seat);
    let hands_after: Vec<usize> = game
        .players()
        .iter()
        .map(|player| player.cards_count())
        .collect();
    assert_eq!(hands_after, hands_before);
    assert_eq!(total_cards(&game), 108);
}

#[test]
fn stale_timer_after_new_game_is_discarded() {
    init_tracing();
    let mut game = Game::new();

    // Hand the turn to Computer 1 and capture the action its timer would run.
    play_matching_numeral(&mut game, 200);
    let action = game
        .next_scheduled()
        .expect("a computer seat holds the turn");
    assert_eq!(action.delay, COMPUTER_TURN_DELAY);
    assert!(matches!(action.kind, ActionKind::ComputerTurn(_)));

    // New Game before the timer fires.
    game.reset();
    assert_eq!(game.generation(), 1);

    let result = game.run_scheduled(action);

    assert_eq!(result, ScheduleResult::Stale);
    assert!(game.winner().is_none());
    assert_eq!(game.current_seat(), Seat::HUMAN);
    for player in game.players() {
        assert_eq!(player.cards_count(), 7);
    }
}

#[test]
fn human_drawn_wild_is_auto_played_with_a_random_color() {
    for _ in 0..2000 {
        let mut game = Game::new();
        let card = match game.draw_card(Seat::HUMAN).unwrap() {
            DrawOutcome::Playable { card } if card.is_wild() => card,
            _ => continue,
        };

        let action = game
            .next_scheduled()
            .expect("a drawn wild arms its auto-play");
        assert_eq!(action.delay, DRAWN_WILD_AUTO_PLAY_DELAY);
        assert_eq!(
            action.kind,
            ActionKind::AutoPlayDrawn {
                seat: Seat::HUMAN,
                card: card.id
            }
        );

        assert_eq!(game.run_scheduled(action), ScheduleResult::Completed);
        assert_eq!(game.discard_pile().top().id, card.id);
        assert!(game.discard_pile().top().color.is_some());
        return;
    }
    panic!("no deal produced a playable wild on the first draw");
}

#[test]
fn computer_drawn_playable_card_is_played_after_the_follow_up_delay() {
    for _ in 0..500 {
        let mut game = Game::new();
        play_matching_numeral(&mut game, 200);
        let seat = game.current_seat();

        let card = match game.draw_card(seat).unwrap() {
            DrawOutcome::Playable { card } => card,
            _ => continue,
        };

        let action = game
            .next_scheduled()
            .expect("a computer's playable draw arms its follow-up");
        assert_eq!(action.delay, DRAWN_CARD_FOLLOW_UP_DELAY);
        assert_eq!(action.kind, ActionKind::AutoPlayDrawn { seat, card: card.id });

        assert_eq!(game.run_scheduled(action), ScheduleResult::Completed);
        assert_eq!(game.discard_pile().top().id, card.id);
        return;
    }
    panic!("no deal produced a playable draw for the computer seat");
}

#[test]
fn timer_firing_after_the_card_was_already_played_is_rejected() {
    for _ in 0..2000 {
        let mut game = Game::new();
        let card = match game.draw_card(Seat::HUMAN).unwrap() {
            DrawOutcome::Playable { card } if card.is_wild() => card,
            _ => continue,
        };

        let action = game
            .next_scheduled()
            .expect("a drawn wild arms its auto-play");

        // The player beats the timer by playing the wild themselves.
        game.play_card(Seat::HUMAN, card.id, Some(CardColor::Red))
            .unwrap();
        let top_before = game.discard_pile().top().clone();
        let current_before = game.current_seat();

        let result = game.run_scheduled(action);

        assert!(matches!(result, ScheduleResult::Rejected(_)));
        assert_eq!(game.discard_pile().top(), &top_before);
        assert_eq!(game.current_seat(), current_before);
        return;
    }
    panic!("no deal produced a playable wild on the first draw");
}
