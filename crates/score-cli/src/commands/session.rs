use anyhow::{Result, bail};
use score_application::AppShell;
use score_core::identity::Identity;

use super::{Output, open::describe, user_error};

pub async fn login(shell: &AppShell, output: &Output, email: &str, password: &str) -> Result<()> {
    let decision = shell.login(email, password).await.map_err(user_error)?;

    let identity = shell
        .current_identity()
        .await
        .ok_or_else(|| anyhow::anyhow!("Login did not produce a session"))?;

    output.emit(&identity, || {
        println!("✅ Logged in as {}", headline(&identity));
        println!("   Landing on {}", describe(decision.view));
    })
}

pub async fn logout(shell: &AppShell) {
    let had_session = shell.restore().await.is_some();
    shell.logout().await;
    if had_session {
        println!("👋 Logged out.");
    } else {
        println!("Not logged in.");
    }
}

pub async fn whoami(shell: &AppShell, output: &Output) -> Result<()> {
    let Some(identity) = shell.restore().await else {
        bail!("Not logged in. Run `score login --email <EMAIL> --password <PASSWORD>`.");
    };
    let selected = shell.selected_company().await;

    output.emit(&identity, || {
        println!("{}", headline(&identity));
        match &identity {
            Identity::Admin(_) => {}
            Identity::Company(c) => {
                println!("  Company:  {}", c.company_name);
                if let Some(code) = &c.company_code {
                    println!("  Code:     {code}");
                }
            }
            Identity::Employee(e) => {
                println!("  Company:  {}", e.company_name);
                println!("  Position: {}", e.position);
            }
            Identity::Group(g) => {
                println!("  Group:    {}", g.group_name);
                let companies: Vec<&str> =
                    g.managed_companies.iter().map(String::as_str).collect();
                println!("  Manages:  {}", companies.join(", "));
                if let Some(company) = &selected {
                    println!("  Selected: {company}");
                }
            }
        }
    })
}

pub async fn select_company(shell: &AppShell, name: &str) -> Result<()> {
    if shell.restore().await.is_none() {
        bail!("Not logged in.");
    }
    shell.select_company(name).await.map_err(user_error)?;
    println!("✅ Selected company {}", name.trim());
    Ok(())
}

fn headline(identity: &Identity) -> String {
    format!(
        "{} <{}> ({})",
        identity.name(),
        identity.email(),
        identity.role()
    )
}
