use crate::ui::ack::render_ack_dialog;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_section, tabs_widget, title_widget};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);
    let profile = app.profile();

    frame.render_widget(Header.widget(regions.header), regions.header);
    frame.render_widget(title_widget(), regions.title);
    frame.render_widget(tabs_widget(profile.active_tab), regions.tabs);
    frame.render_widget(Clear, regions.body);
    render_section(frame, regions.body, profile);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    render_ack_dialog(frame, app.ack_dialog());
}
