//! Hand, player, and dealer tests.

use blackjack_table::{
    Action, ActionError, BetError, Card, Dealer, Deck, Hand, HandStatus, Participant, Player,
    RANKS, ScriptedDecisions, Seat, Suit,
};

fn card(representation: &'static str) -> Card {
    let (_, value) = RANKS
        .iter()
        .find(|(rank, _)| *rank == representation)
        .copied()
        .unwrap();
    Card::new(Suit::Hearts, representation, value)
}

/// A deck that deals `ranks` in order.
fn deck_of(ranks: &[&'static str]) -> Deck {
    Deck::from_cards(ranks.iter().rev().map(|rank| card(rank)).collect())
}

fn hand_of(bet: usize, ranks: &[&'static str]) -> Hand {
    let mut hand = Hand::new(bet);
    for rank in ranks {
        hand.add_card(card(rank));
    }
    hand
}

/// A player who bet `bet` and holds `ranks`.
fn player_with(bet: usize, ranks: &[&'static str]) -> Player {
    let mut player = Player::new("Ada", 100);
    player.make_bet(bet).unwrap();
    let mut deck = deck_of(ranks);
    for _ in ranks {
        player.hit(&mut deck).unwrap();
    }
    player
}

#[test]
fn hand_scores_and_status() {
    let mut hand = hand_of(10, &["A", "K"]);
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.status(), HandStatus::Open);

    let mut deck = deck_of(&["5"]);
    hand.hit(|| deck.draw()).unwrap();
    assert_eq!(hand.score(), 26);
    assert_eq!(hand.status(), HandStatus::Hitting);

    hand.stand();
    hand.stand();
    assert!(hand.is_stand());
    assert_eq!(hand.hit(|| deck.draw()), Err(ActionError::HandStood));
    assert_eq!(hand.len(), 3);
}

#[test]
fn hidden_cards_do_not_score() {
    let mut hand = hand_of(0, &["10", "7"]);
    hand.last_mut().unwrap().set_hidden(true);
    assert_eq!(hand.score(), 10);

    hand.reveal();
    assert_eq!(hand.score(), 17);
    assert!(hand.cards().iter().all(|card| !card.is_hidden()));
}

#[test]
fn only_high_pairs_split() {
    assert!(hand_of(10, &["10", "K"]).can_split());
    assert!(hand_of(10, &["A", "Q"]).can_split());
    assert!(!hand_of(10, &["10", "9"]).can_split());
    assert!(!hand_of(10, &["K"]).can_split());
    assert!(!hand_of(10, &["K", "K", "K"]).can_split());
}

#[test]
fn split_halves_the_bet() {
    let mut hand = hand_of(60, &["K", "Q"]);
    let other = hand.split().unwrap();
    assert_eq!(hand.bet(), 30);
    assert_eq!(other.bet(), 30);
    assert_eq!(hand.cards()[0].representation, "K");
    assert_eq!(other.cards()[0].representation, "Q");

    let mut odd = hand_of(61, &["J", "J"]);
    let other = odd.split().unwrap();
    assert_eq!((odd.bet(), other.bet()), (30, 30));

    let mut low = hand_of(20, &["10", "9"]);
    assert_eq!(low.split(), Err(ActionError::CannotSplit));
    assert_eq!(low.len(), 2);
    assert_eq!(low.bet(), 20);
}

#[test]
fn seat_tracks_the_active_hand() {
    let mut seat = Seat::new("Ada", 100);
    assert!(seat.active_hand().is_none());

    seat.new_hand(10);
    seat.new_hand(20);
    seat.new_hand(30);
    assert_eq!(seat.active_index(), Some(0));

    seat.set_active_hand(2);
    assert_eq!(seat.active_hand().unwrap().bet(), 30);
    seat.set_active_hand(9);
    assert_eq!(seat.active_index(), Some(2));

    seat.clean_hand(0);
    assert_eq!(seat.active_index(), Some(1));
    assert_eq!(seat.active_hand().unwrap().bet(), 30);

    seat.clean_hand(1);
    assert_eq!(seat.active_index(), Some(0));
    assert_eq!(seat.active_hand().unwrap().bet(), 20);

    seat.clean_hand(0);
    assert_eq!(seat.active_index(), None);
    assert!(seat.clean_hand(0).is_none());
}

#[test]
fn clean_hands_removes_listed_or_all() {
    let mut seat = Seat::new("Ada", 100);
    for bet in [10, 20, 30, 40] {
        seat.new_hand(bet);
    }
    seat.set_active_hand(3);

    seat.clean_hands(Some(&[2, 0, 2][..]));
    let bets: Vec<_> = seat.hands().iter().map(Hand::bet).collect();
    assert_eq!(bets, vec![20, 40]);
    assert_eq!(seat.active_hand().unwrap().bet(), 40);

    seat.clean_hands(None);
    assert!(seat.hands().is_empty());
    assert_eq!(seat.active_index(), None);
}

#[test]
fn make_bet_validates_and_takes_money() {
    let mut player = Player::new("Ada", 100);
    assert_eq!(player.make_bet(0), Err(BetError::ZeroBet));
    assert_eq!(player.make_bet(130), Err(BetError::InsufficientFunds));
    assert_eq!(player.money(), 100);
    assert!(player.hands().is_empty());

    assert!(player.is_valid_bet(100));
    assert!(!player.is_valid_bet(101));
    player.make_bet(50).unwrap();
    assert_eq!(player.money(), 50);
    assert_eq!(player.active_hand().unwrap().bet(), 50);
}

#[test]
fn win_bet_pays_once() {
    let mut player = player_with(60, &["10", "8"]);
    assert_eq!(player.money(), 40);

    assert_eq!(player.win_bet(None), 120);
    assert_eq!(player.money(), 160);
    assert_eq!(player.win_bet(None), 0);
    assert_eq!(player.win_bet(Some(0)), 0);
    assert_eq!(player.money(), 160);
}

#[test]
fn win_bet_saturates_on_huge_stakes() {
    let mut player = Player::new("Ada", usize::MAX);
    player.make_bet(usize::MAX).unwrap();
    assert_eq!(player.money(), 0);

    assert_eq!(player.win_bet(None), usize::MAX);
    assert_eq!(player.money(), usize::MAX);
    assert_eq!(player.hands()[0].bet(), 0);
}

#[test]
fn win_bet_pays_a_single_hand() {
    let mut player = player_with(60, &["K", "Q"]);
    let mut deck = deck_of(&["8"]);
    player.split(&mut deck).unwrap();

    assert_eq!(player.win_bet(Some(1)), 60);
    assert_eq!(player.money(), 100);
    assert_eq!(player.hands()[0].bet(), 30);
    assert_eq!(player.hands()[1].bet(), 0);
}

#[test]
fn split_adds_a_hand_and_draws_for_the_active_one() {
    let mut player = player_with(60, &["K", "Q"]);
    assert_eq!(
        player.allowed_actions(),
        vec![Action::Hit, Action::Stand, Action::Split]
    );

    let mut deck = deck_of(&["8"]);
    let drawn = player.split(&mut deck).unwrap();
    assert_eq!(drawn.representation, "8");

    assert_eq!(player.hands().len(), 2);
    assert_eq!(player.seat().active_index(), Some(0));
    assert_eq!(player.score(), 18);
    assert_eq!(player.hands()[1].len(), 1);
    assert_eq!(player.hands()[1].bet(), 30);
    assert_eq!(player.allowed_actions(), vec![Action::Hit, Action::Stand]);
}

#[test]
fn split_refused_for_low_pair() {
    let mut player = player_with(60, &["10", "9"]);
    let mut deck = deck_of(&["8"]);
    assert_eq!(player.split(&mut deck), Err(ActionError::CannotSplit));
    assert_eq!(player.hands().len(), 1);
    assert_eq!(deck.len(), 1);
}

#[test]
fn player_turn_follows_decisions() {
    let mut player = player_with(10, &["10", "4"]);
    let mut deck = deck_of(&["3"]);
    let mut decisions = ScriptedDecisions::new(std::iter::empty(), [0, 1, 5]);

    assert_eq!(player.turn(&mut deck, &mut decisions), Ok(Action::Hit));
    assert_eq!(player.score(), 17);
    assert_eq!(player.turn(&mut deck, &mut decisions), Ok(Action::Stand));
    assert!(player.is_stand());
    assert_eq!(player.hit(&mut deck), Err(ActionError::HandStood));
}

#[test]
fn hitting_without_a_hand_fails() {
    let mut player = Player::new("Ada", 100);
    let mut deck = deck_of(&["3"]);
    assert_eq!(player.hit(&mut deck), Err(ActionError::NoActiveHand));
    assert_eq!(player.score(), 0);
    assert!(!player.is_stand());
}

#[test]
fn dealer_hides_the_second_card_only() {
    let mut dealer = Dealer::new("Dealer", 1000);
    dealer.seat_mut().new_hand(0);
    let mut deck = deck_of(&["10", "4", "5"]);

    dealer.hit(&mut deck).unwrap();
    let hole = dealer.hit(&mut deck).unwrap();
    assert!(hole.is_hidden());
    assert_eq!(dealer.score(), 10);

    dealer.hit(&mut deck).unwrap();
    assert!(!dealer.hands()[0].cards()[2].is_hidden());
    assert_eq!(dealer.score(), 15);
    assert!(!dealer.is_paying());
}

#[test]
fn dealer_plays_to_seventeen() {
    let mut dealer = Dealer::new("Dealer", 1000);
    dealer.seat_mut().new_hand(0);
    let mut deck = deck_of(&["10", "4", "2", "5"]);
    dealer.hit(&mut deck).unwrap();
    dealer.hit(&mut deck).unwrap();

    let mut decisions = ScriptedDecisions::default();
    assert_eq!(dealer.turn(&mut deck, &mut decisions), Ok(Action::Hit));
    assert_eq!(dealer.score(), 16);
    assert_eq!(dealer.turn(&mut deck, &mut decisions), Ok(Action::Hit));
    assert_eq!(dealer.score(), 21);
    assert_eq!(dealer.turn(&mut deck, &mut decisions), Ok(Action::Stand));
    assert!(dealer.is_stand());
}

#[test]
fn action_labels() {
    assert_eq!(Action::Hit.to_string(), "hit");
    assert_eq!(Action::Stand.label(), "stand");
    assert_eq!(Action::Split.to_string(), "split");
}
