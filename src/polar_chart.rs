use std::f32::consts::PI;

use plotters::{
    prelude::LineSeries,
    style::{Color, IntoFont, Palette100, PaletteColor, BLACK},
};
use plotters_iced::{Chart, ChartBuilder, DrawingBackend};

use crate::array_factor::Pattern;

// Radial floor of the display. Values below this are pulled up to the floor
// before plotting; the engine output itself stays unclipped.
pub const DISPLAY_FLOOR_DB: f32 = -40.;

struct PolarTrace {
    points: Vec<(f32, f32)>,
}

// Draws dB patterns on the unit disc with 0° at the top and angles growing
// clockwise, the usual antenna pattern orientation. The radial axis spans
// [DISPLAY_FLOOR_DB, 0].
pub struct PolarChart {
    caption: String,
    floor_db: f32,
    traces: Vec<PolarTrace>,
}

impl PolarChart {
    pub fn new(caption: impl Into<String>) -> PolarChart {
        PolarChart {
            caption: caption.into(),
            floor_db: DISPLAY_FLOOR_DB,
            traces: Vec::new(),
        }
    }

    // Radius of a dB level on the unit disc. The floor maps to the origin,
    // 0 dB to the rim.
    fn radius(&self, db: f32) -> f32 {
        (db.max(self.floor_db) - self.floor_db) / -self.floor_db
    }

    pub fn push_pattern(&mut self, pattern: &Pattern) {
        let points = pattern
            .points()
            .map(|(θ, db)| {
                let ρ = self.radius(db);
                (ρ * θ.sin(), ρ * θ.cos())
            })
            .collect();
        self.traces.push(PolarTrace { points });
    }
}

impl Chart<()> for PolarChart {
    fn build_chart<DB: DrawingBackend>(&self, mut builder: ChartBuilder<DB>) {
        let mut chart = builder
            .caption(&self.caption, ("sans-serif", 30).into_font())
            .build_cartesian_2d(-1.1f32..1.1, -1.1f32..1.1)
            .unwrap();

        let grid = BLACK.mix(0.2);

        // Rings every 10 dB from the floor up to the rim.
        let mut level = 0.;
        while level >= self.floor_db + 10. {
            let ρ = self.radius(level);
            chart
                .draw_series(LineSeries::new(
                    (0..=360).map(|deg| {
                        let α = deg as f32 * PI / 180.;
                        (ρ * α.sin(), ρ * α.cos())
                    }),
                    &grid,
                ))
                .unwrap();
            level -= 10.;
        }

        // Spokes every 30°.
        for spoke in 0..12 {
            let α = spoke as f32 * PI / 6.;
            chart
                .draw_series(LineSeries::new(
                    vec![(0., 0.), (α.sin(), α.cos())],
                    &grid,
                ))
                .unwrap();
        }

        for (j, trace) in self.traces.iter().enumerate() {
            chart
                .draw_series(LineSeries::new(
                    trace.points.iter().copied(),
                    &PaletteColor::<Palette100>::pick(j),
                ))
                .unwrap();
        }
    }
}
