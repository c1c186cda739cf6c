//! Educational content and usage instructions.

use super::{Scene, SceneAction, SceneContext, SceneId};

struct Section {
    title: &'static str,
    body: &'static str,
}

static SECTIONS: &[Section] = &[
    Section {
        title: "About Double Pendulums",
        body: "\
A double pendulum is one pendulum attached to the end of another. Despite \
the simple construction, it is a classic example of a chaotic system.

Key characteristics:

\u{2022} Under most initial conditions the motion is chaotic
\u{2022} Tiny changes in the starting pose lead to wildly different trajectories
\u{2022} The equations of motion are nonlinear, so there is no general \
closed-form solution
\u{2022} The system has two degrees of freedom coupled through both arms

Watching the outer bob's trace is the easiest way to see the chaos: two \
pendulums released a hair apart will diverge within seconds.",
    },
    Section {
        title: "Using the Simulation",
        body: "\
Basic controls:

\u{2022} Start / Pause toggles the simulation
\u{2022} Reset returns every pendulum to its initial pose
\u{2022} The speed slider scales simulated time (0.1x to 3x)
\u{2022} The gravity slider changes the gravitational constant

Working with pendulums:

\u{2022} Add Pendulum spawns a randomized pendulum; each runs independently
\u{2022} Click and drag either bob to reposition it by hand
\u{2022} Toggle the wire to focus on the traced path
\u{2022} Change the trace color and duration from the control panel

Try releasing two pendulums from nearly identical angles and watch how \
quickly their paths separate.",
    },
    Section {
        title: "Further Resources",
        body: "\
Reading:

\u{2022} \"Chaos: Making a New Science\" by James Gleick
\u{2022} \"Nonlinear Dynamics and Chaos\" by Steven Strogatz
\u{2022} \"The Feynman Lectures on Physics, Vol. I\" by Richard Feynman

Online:

\u{2022} Khan Academy: Pendulum Physics
\u{2022} MIT OpenCourseWare: Classical Mechanics
\u{2022} Physics Classroom: Oscillatory Motion

Principles on display here:

\u{2022} Conservation of energy
\u{2022} Nonlinear dynamics and chaos
\u{2022} Sensitivity to initial conditions (the butterfly effect)",
    },
];

pub struct InformationScene {
    section: usize,
}

impl InformationScene {
    pub fn new() -> Self {
        Self { section: 0 }
    }
}

impl Default for InformationScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for InformationScene {
    fn ui(&mut self, ctx: &egui::Context, shared: &mut SceneContext<'_>) -> SceneAction {
        let palette = shared.config.theme.palette();
        let mut action = SceneAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.background))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    egui::Frame::group(ui.style())
                        .inner_margin(20.0)
                        .show(ui, |ui| {
                            ui.set_width(760.0);
                            ui.vertical_centered(|ui| {
                                ui.heading("Information & Instructions");
                            });
                            ui.separator();

                            ui.horizontal_top(|ui| {
                                // Section navigation on the left
                                ui.vertical(|ui| {
                                    ui.set_width(200.0);
                                    for (i, section) in SECTIONS.iter().enumerate() {
                                        if ui
                                            .selectable_label(self.section == i, section.title)
                                            .clicked()
                                        {
                                            self.section = i;
                                        }
                                        ui.add_space(6.0);
                                    }
                                });

                                ui.separator();

                                let section = &SECTIONS[self.section];
                                ui.vertical(|ui| {
                                    ui.heading(section.title);
                                    ui.add_space(8.0);
                                    egui::ScrollArea::vertical()
                                        .max_height(420.0)
                                        .show(ui, |ui| {
                                            ui.label(section.body);
                                        });
                                });
                            });

                            ui.separator();
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Back").clicked() {
                                        action = SceneAction::Switch(SceneId::Home);
                                    }
                                },
                            );
                        });
                });
            });

        action
    }
}
