use std::fmt::Write as _;

use planetary_age::DriftSummary;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN: f64 = 50.0;

struct Colors {
    bg:      &'static str,
    text:    &'static str,
    samples: &'static str,
    mean:    &'static str,
    truth:   &'static str,
}

const DARK: Colors = Colors {
    bg:      "#161b22",
    text:    "#c9d1d9",
    samples: "#a5d6ff",
    mean:    "#ffa657",
    truth:   "#7ee787",
};

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Linear map from a data range onto a pixel range.
#[derive(Clone, Copy)]
struct Axis {
    lo:    f64,
    hi:    f64,
    px_lo: f64,
    px_hi: f64,
}

impl Axis {
    fn new(lo: f64, hi: f64, px_lo: f64, px_hi: f64) -> Self {
        // Pad a flat range so it still maps somewhere sensible
        let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        };
        Self { lo, hi, px_lo, px_hi }
    }

    fn map(self, v: f64) -> f64 {
        self.px_lo + (v - self.lo) / (self.hi - self.lo) * (self.px_hi - self.px_lo)
    }
}

/// Renders the sweep as days-until-birthday against birth year, with the
/// true value and the sample mean drawn as horizontal lines.
pub fn render(summary: &DriftSummary) -> String {
    let c = &DARK;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, c.bg);

    let title = format!(
        "Days until birthday {} (true value {})",
        summary.birthday, summary.true_value
    );
    let _ = writeln!(
        out,
        r#"<text x="{MARGIN}" y="30" fill="{}" font-family="monospace" font-size="14">{}</text>"#,
        c.text,
        escape_xml(&title)
    );

    let mean = summary.mean();
    if let Some((first, last)) = summary.samples.first().zip(summary.samples.last()) {
        let (mut y_lo, mut y_hi) = (summary.true_value, summary.true_value);
        for s in &summary.samples {
            y_lo = y_lo.min(s.days_until);
            y_hi = y_hi.max(s.days_until);
        }
        let x = Axis::new(
            f64::from(last.birth_year),
            f64::from(first.birth_year),
            MARGIN,
            WIDTH - MARGIN,
        );
        let y = Axis::new(y_lo, y_hi, HEIGHT - MARGIN, MARGIN);

        let points: Vec<String> = summary
            .samples
            .iter()
            .map(|s| {
                format!(
                    "{:.1},{:.1}",
                    x.map(f64::from(s.birth_year)),
                    y.map(s.days_until)
                )
            })
            .collect();
        let _ = writeln!(
            out,
            r#"<polyline fill="none" stroke="{}" stroke-width="1" points="{}"/>"#,
            c.samples,
            points.join(" ")
        );

        push_hline(&mut out, y.map(summary.true_value), c.truth, "true");
        if let Some(mean) = mean {
            push_hline(&mut out, y.map(mean), c.mean, "mean");
        }

        let _ = writeln!(
            out,
            r#"<text x="{MARGIN}" y="{:.1}" fill="{}" font-family="monospace" font-size="12">{}</text>"#,
            HEIGHT - MARGIN / 2.0,
            c.text,
            last.birth_year
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" fill="{}" font-family="monospace" font-size="12" text-anchor="end">{}</text>"#,
            WIDTH - MARGIN,
            HEIGHT - MARGIN / 2.0,
            c.text,
            first.birth_year
        );
    }

    out.push_str("</svg>\n");
    out
}

fn push_hline(out: &mut String, y: f64, color: &str, label: &str) {
    let _ = writeln!(
        out,
        r#"<line x1="{MARGIN}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-dasharray="4 2"/>"#,
        WIDTH - MARGIN
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" fill="{color}" font-family="monospace" font-size="11">{label}</text>"#,
        WIDTH - MARGIN + 4.0,
        y + 4.0
    );
}
