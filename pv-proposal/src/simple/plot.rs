use plotters::prelude::*;
use pv_model::CashFlowYear;

/// Draw the accumulated spend without solar against the accumulated cash flow with solar
pub fn plot_cash_flow(
    years: &[CashFlowYear],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if years.is_empty() {
        return Err("cannot plot an empty projection".into());
    }

    let y_min = years
        .iter()
        .map(|year| year.accumulated_cash_flow)
        .fold(0f64, |a, b| a.min(b));
    let y_max = years
        .iter()
        .flat_map(|year| [year.accumulated_baseline_spend, year.accumulated_cash_flow])
        .fold(0f64, |a, b| a.max(b));
    let last_year = (years.len() as u32).max(2);

    let root = BitMapBackend::new(filename, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Accumulated spend vs. accumulated savings", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(1u32..last_year, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("R$")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            years
                .iter()
                .map(|year| (year.year, year.accumulated_baseline_spend)),
            &RED,
        ))?
        .label("Accumulated spend without solar")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            years
                .iter()
                .map(|year| (year.year, year.accumulated_cash_flow)),
            GREEN.stroke_width(3),
        ))?
        .label("Accumulated cash flow with solar")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN.stroke_width(3)));

    chart.draw_series(LineSeries::new(
        [(1u32, 0.0), (last_year, 0.0)],
        &BLACK,
    ))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("Plot saved as {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_projection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        assert!(plot_cash_flow(&[], path.to_str().unwrap()).is_err());
        assert!(!path.exists());
    }
}
