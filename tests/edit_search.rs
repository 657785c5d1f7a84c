use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn book(file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_FILE", file);
    cmd
}

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    for (name, phone) in [("Alice Dept. Computer Science", "555-1234"), ("Bob", "555-5678")] {
        book(&file)
            .args(["add", "--name", name, "--phone", phone, "--email", "x@example.com"])
            .assert()
            .success()
            .stdout(contains("Contact added successfully"));
    }

    // Search by a portion of the name
    book(&file)
        .args(["search", "--term", "Computer"])
        .assert()
        .success()
        .stdout(contains("alice dept. computer science"));

    // Search by phone prefix finds both
    let output = book(&file)
        .args(["search", "--term", "555"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8_lossy(&output).lines().count(), 2);

    book(&file)
        .args(["search", "--term", "zzz"])
        .assert()
        .success()
        .stdout(contains("Couldn't find a contact matching zzz"));

    // Edit the contact (change phone, keep email)
    book(&file)
        .args([
            "edit",
            "--name",
            "ALICE DEPT. COMPUTER SCIENCE",
            "--phone",
            "09123456789",
            "--group",
            "school",
        ])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    book(&file)
        .args(["view", "--name", "alice dept. computer science"])
        .assert()
        .success()
        .stdout(contains("Phone: 09123456789"))
        .stdout(contains("Email: x@example.com"))
        .stdout(contains("Group: school"));

    // Editing an unknown contact does not create it
    book(&file)
        .args(["edit", "--name", "Carol", "--phone", "000"])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    book(&file)
        .args(["view", "--name", "carol"])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    Ok(())
}
