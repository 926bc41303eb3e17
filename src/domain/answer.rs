/// An extractive answer: a span lifted from the transcript, with the model's
/// confidence and the character offsets of the span.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub score: f32,
    pub start: usize,
    pub end: usize,
}
