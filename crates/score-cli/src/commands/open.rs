use anyhow::Result;
use score_application::AppShell;
use score_core::navigation::View;
use serde_json::json;

use super::Output;

/// Restores the session, loads its data and prints the gated view for `fragment`.
pub async fn run(shell: &AppShell, output: &Output, fragment: &str) -> Result<()> {
    let decision = shell.start(fragment).await;

    let report = json!({
        "requested": fragment,
        "view": decision.view,
        "effective_route": decision.effective_route.fragment(),
        "redirected": decision.redirect_to.is_some(),
    });

    output.emit(&report, || {
        println!("{}", describe(decision.view));
        if let Some(target) = decision.redirect_to {
            println!("  (redirected to {})", target.fragment());
        }
    })
}

pub fn describe(view: View) -> String {
    match view {
        View::Loading => "⏳ Loading reference data...".to_string(),
        View::Login => "🔒 Login".to_string(),
        View::Page(route) => format!("📄 {}", route.fragment()),
    }
}
