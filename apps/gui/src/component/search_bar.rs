use super::ContextComponent;
use crate::constants;

#[derive(Default)]
pub struct SearchBar {
    raw_search_query: String,
    request_focus: bool,
}

pub struct SearchBarProps {
    pub draw_separate_line: bool,
}

pub struct SearchBarOutput {
    pub events: Vec<SearchBarEvent>,
}

pub enum SearchBarEvent {
    StartSearch(String),
}

impl SearchBar {
    pub fn request_focus(&mut self) {
        self.request_focus = true;
    }
}

fn setup_text_edit_style(style: &mut egui::Style) {
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
}

impl ContextComponent for SearchBar {
    type Props<'a> = SearchBarProps;
    type Output = SearchBarOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        egui::TopBottomPanel::top(constants::ID_PANEL_SEARCH_BAR)
            .show_separator_line(props.draw_separate_line)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(10.0, 6.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.scope(|ui| {
                        let style = ui.style_mut();
                        setup_text_edit_style(style);

                        let editor = egui::TextEdit::singleline(&mut self.raw_search_query)
                            .desired_width(ui.available_width() - 80.0)
                            .background_color(egui::Color32::TRANSPARENT)
                            .hint_text(constants::SEARCH_BAR_HINT);

                        let output = editor.show(ui);

                        if output.response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            events.push(SearchBarEvent::StartSearch(
                                self.raw_search_query.clone(),
                            ));
                        }

                        if self.request_focus {
                            output.response.request_focus();
                            self.request_focus = false;
                        }
                    });

                    if ui.button("Search").clicked() {
                        events.push(SearchBarEvent::StartSearch(
                            self.raw_search_query.clone(),
                        ));
                    }
                });
            });

        SearchBarOutput { events }
    }
}
