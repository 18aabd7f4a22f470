use super::*;

pub struct CommandDispatch {
  pub effects: Vec<Effect>,
}
