use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " GPT CHAT ".yellow());
    println!("Usage:");
    println!("  {} [options]", "gpt-chat".bold().green());
    println!("\nOptions:");
    println!("  {}             GPT-3.5-Turbo (default model).", " ");
    println!("  {}             GPT-4 model.", "4".bold().cyan());
    println!(
        "  {}     Use any chat-completion model.",
        "-m <model>".bold().cyan()
    );
    println!(
        "  {}          Ask for a JSON object reply.",
        "-json".bold().magenta()
    );
    println!(
        "  {}    Load variables from this env file instead of ./.env.",
        "-env <path>".bold().red()
    );
    println!(
        "  {}      Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nEnvironment:");
    println!(
        "  {}       Required API key.",
        "OPENAI_API_KEY".bold().green()
    );
    println!(
        "  {}  Optional organization id.",
        "OPENAI_ORGANIZATION".bold().green()
    );
    println!("\nType {} at the prompt to quit.", "exit".bold().yellow());
    println!("\nExamples:");
    println!("  {}", "gpt-chat".bold().green());
    println!("  {}", "gpt-chat 4".bold().cyan());
    println!(
        "  {}",
        "gpt-chat -m gpt-4o -env ~/.config/gpt-chat.env".bold().red()
    );
    println!("{:━^60}", "".yellow());
}
