use iced::{Container, Element, Length, Sandbox, Settings};
use phased_array_lib::array_factor::{compute_pattern, ArrayConfig};
use phased_array_lib::polar_chart::PolarChart;
use phased_array_lib::sweep::AngleSweep;
use phased_array_lib::taper::Taper;
use plotters_iced::ChartWidget;

struct State {
    chart: PolarChart,
}

impl Sandbox for State {
    type Message = ();

    fn new() -> Self {
        let sweep = AngleSweep::default();

        // 8 elements at half-wavelength spacing, 3 GHz, steered 30° off
        // broadside.
        let config = ArrayConfig::default();

        let uniform = compute_pattern(&config, &sweep).unwrap();
        let tapered = compute_pattern(
            &ArrayConfig {
                taper: Taper::Hamming,
                ..config.clone()
            },
            &sweep,
        )
        .unwrap();

        let mut chart = PolarChart::new(format!(
            "Array Pattern (Steered to {}°)",
            config.steering_deg
        ));
        chart.push_pattern(&uniform);
        chart.push_pattern(&tapered);

        Self { chart }
    }

    fn title(&self) -> String {
        "Phased Array Pattern".to_owned()
    }

    fn update(&mut self, _message: Self::Message) {}

    fn view(&mut self) -> Element<Self::Message> {
        let chart_view = ChartWidget::new(&mut self.chart)
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(chart_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(5)
            .center_x()
            .center_y()
            .into()
    }
}

fn main() {
    State::run(Settings {
        antialiasing: true,
        ..Settings::default()
    })
    .unwrap();
}
