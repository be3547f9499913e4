//! Page chrome for the `HtmlFormatter`.

/// Document head with all CSS. Chart colors are CSS variables so the
/// embedded SVG follows light and dark themes.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>inkstreak Writing Report</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-chart-primary: #6366f1;
            --color-streak: #f59e0b;
            --color-level-0: #ebedf0;
            --color-level-1: #9be9a8;
            --color-level-2: #40c463;
            --color-level-3: #30a14e;
            --color-level-4: #216e39;
        }
        @media (prefers-color-scheme: dark) {
            :root {
                --color-bg: #0f172a;
                --color-card: #1e293b;
                --color-border: #334155;
                --color-text: #e2e8f0;
                --color-text-muted: #94a3b8;
                --color-level-0: #161b22;
                --color-level-1: #0e4429;
                --color-level-2: #006d32;
                --color-level-3: #26a641;
                --color-level-4: #39d353;
            }
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .summary-card.streak .value { color: var(--color-streak); }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; overflow-x: auto; }
        .chart-container h3 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
        .chart-container svg { height: auto; max-width: 100%; }
        .chart-container svg rect:hover { opacity: 0.85; }
        .empty { padding: 2rem; text-align: center; color: var(--color-text-muted); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .summary-card, .chart-container { border: 1px solid #333; }
        }
    </style>
</head>
<body>
    <div class="container">
"#;

pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>inkstreak</strong>
        </div>
    </div>
</body>
</html>
"#;
