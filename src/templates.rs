use crate::processing::{DerivedMetrics, TrainingRecord};
use crate::processing::summary::hours;

fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

pub fn render_day_report(steps: u64, metrics: &DerivedMetrics) -> String {
    let mut body = String::new();
    body.push_str(&format!("Количество шагов: {steps}.\n"));
    body.push_str(&format!(
        "Дистанция составила {} км.\n",
        format_two_decimals(metrics.distance_km)
    ));
    body.push_str(&format!(
        "Вы сожгли {} ккал.\n",
        format_two_decimals(metrics.calories)
    ));
    body
}

pub fn render_training_report(record: &TrainingRecord, metrics: &DerivedMetrics) -> String {
    let mut body = String::new();
    body.push_str(&format!("Тип тренировки: {}\n", record.activity.label()));
    body.push_str(&format!(
        "Длительность: {} ч.\n",
        format_two_decimals(hours(record.duration))
    ));
    body.push_str(&format!(
        "Дистанция: {} км.\n",
        format_two_decimals(metrics.distance_km)
    ));
    body.push_str(&format!(
        "Скорость: {} км/ч\n",
        format_two_decimals(metrics.mean_speed_kmh)
    ));
    body.push_str(&format!(
        "Сожгли калорий: {}\n",
        format_two_decimals(metrics.calories)
    ));
    body
}
