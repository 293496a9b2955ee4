//! Demonstrates tokenizing Darija code and collecting diagnostics

use darija::error::CallbackSink;
use darija::lexer::{format_tokens, Lexer, LexerOptions};

fn main() {
    let examples = vec![
        ("Arithmetic", "3 + 4 * 10\n+ -20 *2"),
        (
            "Keywords",
            r#"3aref f(x)
    ila x
        red x * 2
    wla
        red walo # nothing"#,
        ),
        ("Unknown characters", "abc @ 12 $ def"),
    ];

    for (name, code) in examples {
        println!("\n=== {} ===", name);
        println!("Code:\n{}\n", code);

        let mut errors = 0;
        let lexer = Lexer::with_sink(
            code,
            LexerOptions::default(),
            CallbackSink(|e: &darija::LexicalError| {
                errors += 1;
                println!("✗ {}", e);
            }),
        );
        let tokens: Vec<_> = lexer.collect();

        println!("{}", format_tokens(&tokens));
        println!("✓ {} tokens, {} errors", tokens.len(), errors);
    }
}
