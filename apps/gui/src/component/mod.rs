pub mod results_modal;
pub mod search_bar;

pub use results_modal::{ResultsModal, ResultsModalEvent, ResultsModalProps};
pub use search_bar::{SearchBar, SearchBarEvent, SearchBarProps};

/// A component rendered directly against the egui context, taking
/// per-frame props and handing events back to the caller.
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}
