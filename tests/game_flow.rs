//! End-to-end games through the public API

use phonics_wordle::challenge::{challenge_link, decode, encode, seed_link};
use phonics_wordle::config::{GameConfig, GameRules, GameSettings};
use phonics_wordle::core::{Clue, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, clue};
use phonics_wordle::game::{
    EmojiPalette, GameState, GuessError, INVALID_CHALLENGE_HINT, Session, ShareContent,
    share_text,
};
use phonics_wordle::rules::Difficulty;
use phonics_wordle::selection::{ConfigError, TargetSelector, Tier, TierStage};

fn config() -> GameConfig {
    GameConfig::embedded().unwrap()
}

fn seeded(seed: &str, game_number: u32) -> GameSettings {
    GameSettings {
        seed: Some(seed.to_string()),
        game_number,
        ..GameSettings::default()
    }
}

#[test]
fn same_seed_link_gives_same_word_to_two_players() {
    let config = config();
    let link = seed_link("https://x.org/", "20220110", 5, Tier::DEFAULT, 17);

    let alice = Session::from_link(&config, &link, GameRules::default()).unwrap();
    let bob = Session::from_link(&config, &link, GameRules::default()).unwrap();

    assert_eq!(alice.game().target(), bob.game().target());
    assert_eq!(alice.game().word_length(), 5);
    assert_eq!(alice.share_link("https://x.org/"), link);
    assert_eq!(
        alice.status_line(),
        "Monday, January 10, 2022 — length 5, game 17"
    );
}

#[test]
fn seed_link_at_another_tier_gives_the_same_word() {
    let config = config();
    let settings = GameSettings {
        tier: Tier::new(9).unwrap(),
        ..seeded("tier nine", 3)
    };
    let sender = Session::start(&config, settings).unwrap();
    let link = sender.share_link("https://x.org/");
    assert!(link.contains("&difficulty=9&"), "{link}");

    let receiver = Session::from_link(&config, &link, GameRules::default()).unwrap();
    assert_eq!(receiver.settings().tier, Tier::new(9).unwrap());
    assert_eq!(receiver.game().target(), sender.game().target());
}

#[test]
fn playing_through_a_seed_matches_replaying_it() {
    let config = config();
    let mut session = Session::start(&config, seeded("walk", 1)).unwrap();
    for _ in 0..9 {
        session.next_game().unwrap();
    }
    let replay = Session::start(&config, seeded("walk", 10)).unwrap();
    assert_eq!(session.game().target(), replay.game().target());
    assert_eq!(session.settings().game_number, 10);
}

#[test]
fn advance_to_n_plus_one_is_n_picks_after_reset() {
    let config = config();
    let mut selector = TargetSelector::new(&config, None);
    for n in [0_u32, 1, 5, 40] {
        let advanced = selector
            .advance_to(Some("phonics"), 3, Tier::new(6).unwrap(), n + 1)
            .unwrap();

        let mut stream = TargetSelector::new(&config, Some("phonics"));
        let mut last = None;
        for _ in 0..=n {
            last = Some(stream.select_random(3, Tier::new(6).unwrap()).unwrap());
        }
        assert_eq!(Some(advanced), last, "n = {n}");
    }
}

#[test]
fn challenge_round_trip_through_a_link() {
    let config = config();
    let link = challenge_link("https://x.org/play", "plane", Tier::MAX);
    let mut session = Session::from_link(&config, &link, GameRules::default()).unwrap();

    assert_eq!(session.game().target().text(), "plane");
    assert_eq!(session.status_line(), "playing a challenge game");

    let game = session.game_mut();
    assert_eq!(game.submit_word("crane"), Ok(GameState::Playing));
    assert_eq!(game.submit_word("plane"), Ok(GameState::Won));
    assert_eq!(
        game.hint(),
        "You won! The answer was PLANE. (Enter to play a random game)"
    );

    let text = share_text(
        &session.share_link("https://x.org/play"),
        session.game().guesses(),
        ShareContent::Emoji(EmojiPalette::ColorBlind),
    );
    assert_eq!(
        text,
        "https://x.org/play?challenge=cGxhbmU&difficulty=14\n\n⬛⬛🟧🟧🟧\n🟧🟧🟧🟧🟧"
    );
}

#[test]
fn broken_challenge_falls_back_with_notice() {
    let config = config();
    let tokens = [
        String::new(),
        "%%%".to_string(),
        encode("zzzz"),
        encode("plane"),
    ];
    for token in &tokens {
        let link = format!("?challenge={token}&difficulty=1&length=3");
        let session = Session::from_link(&config, &link, GameRules::default()).unwrap();
        assert!(!session.is_challenge(), "token {token:?}");
        if !token.is_empty() {
            assert_eq!(session.game().hint(), INVALID_CHALLENGE_HINT);
        }
        let target = session.game().target();
        assert_eq!(target.len(), 3);
        assert!(config.tiers().letters(Tier::MIN).allows(target.text()));
    }
}

#[test]
fn hard_mode_blocks_and_normal_mode_allows() {
    let config = config();
    for (difficulty, expected) in [
        (Difficulty::Normal, Ok(GameState::Playing)),
        (
            Difficulty::Hard,
            Err(GuessError::Violation("Guess must contain P".to_string())),
        ),
    ] {
        let rules = GameRules {
            difficulty,
            ..GameRules::default()
        };
        let link = challenge_link("", "plane", Tier::MAX);
        let mut session = Session::from_link(&config, &link, rules).unwrap();
        let game = session.game_mut();
        // speed against plane: P and E yellow, nothing green
        game.submit_word("speed").unwrap();
        assert_eq!(game.submit_word("crane"), expected, "{difficulty}");
    }
}

#[test]
fn lost_game_reveals_answer_and_refuses_guesses() {
    let config = config();
    let rules = GameRules {
        max_guesses: 3,
        ..GameRules::default()
    };
    let link = challenge_link("", "rice", Tier::MAX);
    let mut session = Session::from_link(&config, &link, rules).unwrap();
    let game = session.game_mut();
    for _ in 0..2 {
        assert_eq!(game.submit_word("rise"), Ok(GameState::Playing));
    }
    assert_eq!(game.submit_word("rise"), Ok(GameState::Lost));
    assert_eq!(game.submit_word("rice"), Err(GuessError::GameOver));
    assert!(game.hint().starts_with("You lost! The answer was RICE."));
}

#[test]
fn clue_never_over_credits_repeated_letters() {
    let config = config();
    let words: Vec<Word> = config
        .vocabulary()
        .words()
        .filter(|w| w.len() == 5)
        .take(60)
        .map(|w| Word::new(w).unwrap())
        .collect();
    for guess in &words {
        for target in &words {
            let clues = clue(guess, target);
            for (i, c) in clues.iter().enumerate() {
                if guess.chars()[i] == target.chars()[i] {
                    assert_eq!(c.clue, Clue::Correct);
                }
            }
            for letter in b'a'..=b'z' {
                let credited = clues
                    .iter()
                    .filter(|c| c.letter == letter && c.clue != Clue::Absent)
                    .count();
                assert!(credited <= target.count_of(letter), "{guess} vs {target}");
            }
        }
    }
}

#[test]
fn every_target_token_decodes() {
    let config = config();
    for word in config.vocabulary().words() {
        assert_eq!(decode(&encode(word)).unwrap(), word);
    }
}

#[test]
fn every_length_and_tier_has_a_target() {
    let config = config();
    let mut selector = TargetSelector::new(&config, Some("coverage"));
    for tier in Tier::all() {
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            let word = selector.select_random(length, tier).unwrap();
            assert_eq!(word.len(), length);
        }
    }
}

#[test]
fn empty_tier_is_a_config_error_not_a_hang() {
    let stages = [TierStage {
        label: "SATPIN",
        boundary: "tips",
        letters: "satpin",
    }; 14];
    let config =
        GameConfig::new(&["*satpin*", "sat", "pin", "tips"], &["snip"], &stages).unwrap();
    assert_eq!(
        Session::start(
            &config,
            GameSettings {
                length: 5,
                tier: Tier::MIN,
                ..GameSettings::default()
            }
        )
        .err(),
        Some(ConfigError::NoCandidates {
            length: 5,
            tier: Tier::MIN
        })
    );
}
