/// Logical host keys forwarded by a frontend.
///
/// This is deliberately a small keyboard-ish alphabet rather than a set of
/// console buttons: each emulated system decides its own mapping (the Game
/// Boy core maps Z/X to A/B, A/S to Select/Start, and the arrows to the
/// d-pad).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    C,
    D,
    S,
    W,
    X,
    Z,
    Return,
    Space,
    Escape,
}
