use super::ContextComponent;
use crate::app::SearchOutcome;
use crate::constants;

/// Modal notification showing the outcome of the last search.
#[derive(Default)]
pub struct ResultsModal;

pub struct ResultsModalProps<'a> {
    pub outcome: &'a SearchOutcome,
}

pub struct ResultsModalOutput {
    pub events: Vec<ResultsModalEvent>,
}

pub enum ResultsModalEvent {
    Dismissed,
}

impl ContextComponent for ResultsModal {
    type Props<'a> = ResultsModalProps<'a>;
    type Output = ResultsModalOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        let modal = egui::Modal::new(egui::Id::new(constants::ID_RESULTS_MODAL))
            .show(ctx, |ui| {
                ui.set_width(320.0);

                ui.heading("Results");
                ui.separator();

                match props.outcome {
                    SearchOutcome::Matches { query, hits } => {
                        ui.label(format!(
                            "The term '{query}' was found in the following documents:"
                        ));
                        ui.add_space(4.0);
                        egui::ScrollArea::vertical()
                            .max_height(160.0)
                            .show(ui, |ui| {
                                for hit in hits {
                                    ui.label(format!("- {}", hit.name));
                                }
                            });
                    }
                    SearchOutcome::NoMatches { query } => {
                        ui.label(format!(
                            "The term '{query}' does not appear in any document."
                        ));
                    }
                    SearchOutcome::Failed { query, message } => {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            format!("Search for '{query}' failed: {message}"),
                        );
                    }
                }

                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    events.push(ResultsModalEvent::Dismissed);
                }
            });

        if modal.should_close() {
            events.push(ResultsModalEvent::Dismissed);
        }

        ResultsModalOutput { events }
    }
}
