//! Runs the `loja` binary end to end over piped stdin/stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_loja(input: &str, balance: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_loja"));
    cmd.env_remove("RUST_LOG")
        .env_remove("LOJA_STARTING_BALANCE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(balance) = balance {
        cmd.env("LOJA_STARTING_BALANCE", balance);
    }

    let mut child = cmd.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_default_run_keeps_stderr_empty() {
    let output = run_loja("4\nabc\n2\n9\n1\n5\n", None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.contains("Erro: Entrada inválida. O carrinho está vazio.\n"));
    assert!(stdout.contains("Erro: Entrada inválida. 'abc' não é um número inteiro.\n"));
    assert!(stdout.contains("Erro: Produto não encontrado.\n"));
    assert!(stdout.ends_with("ACABOU!\n\nOperação finalizada.\n"));
    assert_eq!(stderr, "", "unexpected log output");
}

#[test]
fn test_starting_balance_from_environment() {
    let output = run_loja("2\n3\n1\n4\n5\n", Some("150.00"));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(
        "Pagamento de 100.00€ realizado com sucesso!\nSaldo restante: 50.00€\n"
    ));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn test_invalid_starting_balance_is_logged_and_ignored() {
    let output = run_loja("2\n3\n1\n4\n5\n", Some("muito"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("Saldo restante: 400.00€\n"));
    assert!(stderr.contains("Ignoring configuration value"));
    assert!(!stdout.contains("Ignoring"));
}
