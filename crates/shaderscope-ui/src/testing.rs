//! Headless egui driver for widget tests.
//!
//! Widgets are located by the text they paint, so tests can point at a
//! button by its label without knowing the layout.

use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Ui};

pub(crate) struct Harness {
    ctx: Context,
    events: Vec<Event>,
    texts: Vec<(String, Rect)>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self {
            ctx: Context::default(),
            events: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Runs one frame with the queued events. `build_ui` is called once per
    /// egui pass.
    pub(crate) fn frame(&mut self, mut build_ui: impl FnMut(&mut Ui)) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events: std::mem::take(&mut self.events),
            ..RawInput::default()
        };
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| build_ui(ui));
        });

        self.texts.clear();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut self.texts);
        }
    }

    /// Texts painted by the last frame.
    pub(crate) fn texts(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(|(text, _)| text.as_str())
    }

    /// Centre of the first painted text matching `matches`.
    pub(crate) fn find(&self, matches: impl Fn(&str) -> bool) -> Option<Pos2> {
        self.texts
            .iter()
            .find(|(text, _)| matches(text))
            .map(|(_, rect)| rect.center())
    }

    pub(crate) fn hover(&mut self, pos: Pos2) {
        self.events.push(Event::PointerMoved(pos));
    }

    pub(crate) fn press(&mut self, pos: Pos2, pressed: bool) {
        self.events.push(Event::PointerMoved(pos));
        self.events.push(Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        });
    }

    /// Moves to the first text matching `matches` and clicks it over three
    /// frames: hover, press, release.
    pub(crate) fn click(&mut self, matches: impl Fn(&str) -> bool, mut build_ui: impl FnMut(&mut Ui)) {
        let pos = self.find(matches).expect("no painted text matches");
        self.hover(pos);
        self.frame(&mut build_ui);
        self.press(pos, true);
        self.frame(&mut build_ui);
        self.press(pos, false);
        self.frame(&mut build_ui);
    }
}

fn collect_texts(shape: &Shape, texts: &mut Vec<(String, Rect)>) {
    match shape {
        Shape::Text(text) => {
            let rect = text.galley.rect.translate(text.pos.to_vec2());
            texts.push((text.galley.text().to_string(), rect));
        }
        Shape::Vec(shapes) => {
            for shape in shapes {
                collect_texts(shape, texts);
            }
        }
        _ => {}
    }
}
