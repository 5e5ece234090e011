//! # Goney CLI `generate` Integration Tests
//!
//! File: cli/tests/generate.rs
//!
//! ## Overview
//!
//! Runs `goney generate` against temporary project directories and checks
//! the files written for the flat module layout, the legacy layout and the
//! acknowledged-only generators, plus template overrides and best-effort
//! continuation after a failed file.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// # Test CRUD Module Layout (`test_crud_generates_module_files`)
///
/// A plain `crud` run writes all seven module files into
/// `src/modules/<name>/` and nothing under `src/common/`.
#[test]
fn test_crud_generates_module_files() {
    let dir = tempdir().unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module users generated successfully"));

    let module_dir = dir.path().join("src/modules/users");
    assert_eq!(
        file_names(&module_dir),
        vec![
            "users.controller.go",
            "users.dto.go",
            "users.model.go",
            "users.module.go",
            "users.repository.go",
            "users.service.go",
            "users_test.go",
        ]
    );
    assert!(!dir.path().join("src/common").exists());

    let controller = read(module_dir.join("users.controller.go"));
    assert!(controller.starts_with("package users\n"));
    assert!(controller.contains("usersService *UsersService"));
    assert!(controller.contains("CreateUsersRequest"));

    let dto = read(module_dir.join("users.dto.go"));
    assert!(dto.contains("type UsersResponse struct"));
    assert!(dto.contains("`json:\"created_at\"`"));
}

/// # Test Global Mode (`test_crud_global_uses_shared_artifacts`)
///
/// `--global` writes the shared base DTO and model, skips the per-module
/// ones, and imports the shared packages through the `go.mod` module path.
#[test]
fn test_crud_global_uses_shared_artifacts() {
    let dir = tempdir().unwrap();
    write_go_mod(dir.path(), "shop");

    goney_in(dir.path())
        .args(["generate", "crud", "products", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Global mode"));

    assert!(dir.path().join("src/common/dto/base.go").is_file());
    assert!(dir.path().join("src/common/models/base.go").is_file());

    let module_dir = dir.path().join("src/modules/products");
    assert!(!module_dir.join("products.dto.go").exists());
    assert!(!module_dir.join("products.model.go").exists());
    assert!(module_dir.join("products.module.go").is_file());

    let service = read(module_dir.join("products.service.go"));
    assert!(service.contains("\"shop/src/common/dto\""));
    assert!(service.contains("dto.BaseResponse"));
    let repository = read(module_dir.join("products.repository.go"));
    assert!(repository.contains("\"shop/src/common/models\""));
    assert!(repository.contains("models.NamedModel"));
}

/// # Test Shared Files Are Kept (`test_crud_global_keeps_existing_shared_files`)
#[test]
fn test_crud_global_keeps_existing_shared_files() {
    let dir = tempdir().unwrap();
    let dto_base = dir.path().join("src/common/dto/base.go");
    fs::create_dir_all(dto_base.parent().unwrap()).unwrap();
    fs::write(&dto_base, "// sentinel\npackage dto\n").unwrap();

    goney_in(dir.path())
        .args(["g", "crud", "accounts", "--global"])
        .assert()
        .success();

    assert_eq!(read(&dto_base), "// sentinel\npackage dto\n");
    assert!(dir.path().join("src/common/models/base.go").is_file());
}

/// # Test Skipping The DTO (`test_crud_no_dto_still_references_dto_types`)
#[test]
fn test_crud_no_dto_still_references_dto_types() {
    let dir = tempdir().unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "orders", "--no-dto"])
        .assert()
        .success();

    let module_dir = dir.path().join("src/modules/orders");
    assert!(!module_dir.join("orders.dto.go").exists());
    assert!(module_dir.join("orders.model.go").is_file());
    assert!(read(module_dir.join("orders.controller.go")).contains("CreateOrdersRequest"));
}

#[test]
fn test_crud_no_model() {
    let dir = tempdir().unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "tags", "--no-model"])
        .assert()
        .success();

    let module_dir = dir.path().join("src/modules/tags");
    assert!(!module_dir.join("tags.model.go").exists());
    assert!(module_dir.join("tags.dto.go").is_file());
}

/// # Test Regeneration (`test_crud_rerun_is_byte_identical`)
#[test]
fn test_crud_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    write_go_mod(dir.path(), "github.com/acme/shop");
    goney_in(dir.path()).args(["g", "crud", "users"]).assert().success();

    let module_dir = dir.path().join("src/modules/users");
    let first: Vec<String> = file_names(&module_dir)
        .iter()
        .map(|name| read(module_dir.join(name)))
        .collect();

    goney_in(dir.path()).args(["g", "crud", "users"]).assert().success();
    let second: Vec<String> = file_names(&module_dir)
        .iter()
        .map(|name| read(module_dir.join(name)))
        .collect();
    assert_eq!(first, second);
}

/// # Test Best-Effort Generation (`test_crud_continues_after_failed_file`)
///
/// A directory sitting where the service file belongs makes that one write
/// fail. The failure is reported on stderr, the remaining files are still
/// written, and the process exits successfully.
#[test]
fn test_crud_continues_after_failed_file() {
    let dir = tempdir().unwrap();
    let module_dir = dir.path().join("src/modules/users");
    fs::create_dir_all(module_dir.join("users.service.go")).unwrap();

    goney_in(dir.path())
        .args(["generate", "crud", "users"])
        .assert()
        .success()
        .stderr(predicate::str::contains("users.service.go"))
        .stdout(predicate::str::contains("generated with errors"));

    assert!(module_dir.join("users.controller.go").is_file());
    assert!(module_dir.join("users.repository.go").is_file());
    assert!(module_dir.join("users_test.go").is_file());
}

/// # Test Legacy CRUD Layout (`test_crud_legacy_layout`)
#[test]
fn test_crud_legacy_layout() {
    let dir = tempdir().unwrap();
    write_go_mod(dir.path(), "billing");

    goney_in(dir.path())
        .args(["generate", "crud", "invoice", "--legacy"])
        .assert()
        .success();

    for file in [
        "controllers/invoice_controller.go",
        "services/invoice_service.go",
        "repositories/invoice_repository.go",
        "models/invoice_model.go",
        "dto/invoice_dto.go",
        "enums/invoice_enum.go",
        "services/invoice_service_test.go",
    ] {
        assert!(dir.path().join(file).is_file(), "missing {}", file);
    }
    assert!(!dir.path().join("src/modules").exists());

    let controller = read(dir.path().join("controllers/invoice_controller.go"));
    assert!(controller.contains("\"billing/dto\""));
    assert!(controller.contains("@Router /invoices [get]"));
    let enums = read(dir.path().join("enums/invoice_enum.go"));
    assert!(enums.contains("type InvoiceStatus string"));
    let model = read(dir.path().join("models/invoice_model.go"));
    assert!(model.contains("return \"invoice\""));
}

#[test]
fn test_generate_legacy_components() {
    let dir = tempdir().unwrap();

    goney_in(dir.path())
        .args(["generate", "controller", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller user generated"));
    assert!(dir.path().join("controllers/user_controller.go").is_file());
    assert!(dir.path().join("dto/user_dto.go").is_file());
    assert!(!dir.path().join("models").exists());

    goney_in(dir.path())
        .args(["generate", "service", "user"])
        .assert()
        .success();
    assert!(dir.path().join("services/user_service.go").is_file());
    assert!(dir.path().join("models/user_model.go").is_file());

    goney_in(dir.path())
        .args(["generate", "repository", "user"])
        .assert()
        .success();
    let repository = read(dir.path().join("repositories/user_repository.go"));
    assert!(repository.contains("gorm"));
}

/// # Test Acknowledged Generators (`test_acknowledged_generators_write_nothing`)
#[test]
fn test_acknowledged_generators_write_nothing() {
    let dir = tempdir().unwrap();

    goney_in(dir.path())
        .args(["generate", "microservice", "grpc", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("billing acknowledged"));
    goney_in(dir.path())
        .args(["generate", "guard", "auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guard auth acknowledged"));
    goney_in(dir.path())
        .args(["generate", "interceptor", "logging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interceptor logging acknowledged"));

    assert!(file_names(dir.path()).is_empty());
}

/// # Test Template Overrides (`test_templates_dir_override`)
///
/// A file in the override directory replaces the embedded template with the
/// same name; the others keep their built-in content.
#[test]
fn test_templates_dir_override() {
    let dir = tempdir().unwrap();
    let templates = tempdir().unwrap();
    fs::create_dir_all(templates.path().join("module")).unwrap();
    fs::write(
        templates.path().join("module/dto.go.tera"),
        "package {{ PackageName }}\n\n// custom dto for {{ ClassName }}\n",
    )
    .unwrap();

    goney_in(dir.path())
        .env("GONEY_TEMPLATES_DIR", templates.path())
        .args(["generate", "crud", "users"])
        .assert()
        .success();

    let module_dir = dir.path().join("src/modules/users");
    assert_eq!(
        read(module_dir.join("users.dto.go")),
        "package users\n\n// custom dto for Users\n"
    );
    assert!(read(module_dir.join("users.model.go")).contains("type Users struct"));
}

/// # Test Unbound Placeholder (`test_override_with_unknown_placeholder_fails_that_file`)
#[test]
fn test_override_with_unknown_placeholder_fails_that_file() {
    let dir = tempdir().unwrap();
    let templates = tempdir().unwrap();
    fs::create_dir_all(templates.path().join("module")).unwrap();
    fs::write(
        templates.path().join("module/dto.go.tera"),
        "package {{ PackageName }}\n// {{ NotAPlaceholder }}\n",
    )
    .unwrap();

    goney_in(dir.path())
        .args(["generate", "crud", "users", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("users.dto.go"));

    let module_dir = dir.path().join("src/modules/users");
    assert!(!module_dir.join("users.dto.go").exists());
    assert!(module_dir.join("users.controller.go").is_file());
}

/// # Test Missing Override Directory (`test_missing_templates_dir_falls_back_to_builtins`)
#[test]
fn test_missing_templates_dir_falls_back_to_builtins() {
    let dir = tempdir().unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "users", "--templates-dir"])
        .arg(dir.path().join("nope"))
        .assert()
        .success();
    assert!(read(dir.path().join("src/modules/users/users.dto.go")).contains("UsersResponse"));
}

#[test]
fn test_templates_path_that_is_a_file_is_an_error() {
    let dir = tempdir().unwrap();
    let not_a_dir = dir.path().join("templates.txt");
    fs::write(&not_a_dir, "").unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "users", "--templates-dir"])
        .arg(&not_a_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
    assert!(!dir.path().join("src").exists());
}

/// # Test Legacy Global Mode (`test_crud_legacy_global_uses_global_files`)
///
/// The legacy layout keeps its shared files in `dto/global_dto.go` and
/// `models/global_model.go`. They are created once, and no per-entity DTO
/// or model is written.
#[test]
fn test_crud_legacy_global_uses_global_files() {
    let dir = tempdir().unwrap();
    write_go_mod(dir.path(), "billing");
    let global_dto = dir.path().join("dto/global_dto.go");
    let global_model = dir.path().join("models/global_model.go");

    goney_in(dir.path())
        .args(["generate", "crud", "invoice", "--legacy", "--global"])
        .assert()
        .success();

    assert!(global_dto.is_file());
    assert!(global_model.is_file());
    assert!(!dir.path().join("dto/invoice_dto.go").exists());
    assert!(!dir.path().join("models/invoice_model.go").exists());
    assert!(dir.path().join("enums/invoice_enum.go").is_file());
    assert!(dir.path().join("services/invoice_service_test.go").is_file());
    let service = read(dir.path().join("services/invoice_service.go"));
    assert!(service.contains("dto.BaseResponse"));
    assert!(service.contains("models.NamedModel"));

    fs::write(&global_dto, "// sentinel\npackage dto\n").unwrap();
    goney_in(dir.path())
        .args(["generate", "crud", "invoice", "--legacy", "--global"])
        .assert()
        .success();
    assert_eq!(read(&global_dto), "// sentinel\npackage dto\n");
    assert!(!dir.path().join("dto/invoice_dto.go").exists());
}

/// # Test Generated Imports (`test_generated_go_files_import_what_they_use`)
///
/// Every Go file emitted by each layout and mode imports exactly the
/// packages it refers to.
#[test]
fn test_generated_go_files_import_what_they_use() {
    let runs: [&[&str]; 4] = [
        &["generate", "crud", "users"],
        &["generate", "crud", "products", "--global"],
        &["generate", "crud", "invoice", "--legacy"],
        &["generate", "crud", "ledger", "--legacy", "--global"],
    ];
    for args in runs {
        let dir = tempdir().unwrap();
        write_go_mod(dir.path(), "github.com/acme/shop");
        goney_in(dir.path()).args(args).assert().success();
        assert_go_imports_consistent(dir.path());
    }

    let dir = tempdir().unwrap();
    write_go_mod(dir.path(), "github.com/acme/shop");
    for component in ["controller", "service", "repository"] {
        goney_in(dir.path())
            .args(["generate", component, "user"])
            .assert()
            .success();
    }
    assert_go_imports_consistent(dir.path());
}
