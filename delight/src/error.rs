use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not that seat's turn")]
    NotYourTurn,
    #[error("That card is not in the player's hand")]
    CardNotInHand,
    #[error("You can't play that card")]
    IllegalPlay,
    #[error("A color must be chosen when playing a wild card")]
    ColorChoiceRequired,
    #[error("The round is already over")]
    RoundOver,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
