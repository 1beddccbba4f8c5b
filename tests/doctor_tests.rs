// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financas::commands::doctor::find_issues;
use financas::db::{self, MemoryStorage, Storage};

#[test]
fn clean_data_has_no_issues() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            db::TRANSACTIONS_KEY,
            r#"[{"id":"t1","type":"credit_card","description":"Fatura Nubank","amount":"10","date":"2025-05-01","cardId":"k1"}]"#,
        )
        .unwrap();
    storage
        .set(db::CARDS_KEY, r#"[{"id":"k1","name":"Nubank","dueDay":10,"color":"Roxo"}]"#)
        .unwrap();
    assert!(find_issues(&db::load(&storage)).is_empty());
}

#[test]
fn reports_orphans_duplicates_and_stray_fields() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            db::TRANSACTIONS_KEY,
            r#"[
                {"id":"t1","type":"credit_card","description":"Fatura","amount":"10","date":"2025-05-01","cardId":"gone"},
                {"id":"t2","type":"credit_card","description":"Fatura","amount":"20","date":"2025-05-09","cardId":"gone"},
                {"id":"t3","type":"income","description":"Extra","amount":"5","date":"2025-05-09","category":"Lazer","isPaid":true},
                {"id":"t4","type":"variable","description":"Cafe","amount":"5","date":"2025-05-09"}
            ]"#,
        )
        .unwrap();

    let issues: Vec<String> = find_issues(&db::load(&storage))
        .into_iter()
        .map(|r| r[0].clone())
        .collect();
    assert_eq!(issues.iter().filter(|i| *i == "orphan_invoice").count(), 2);
    assert!(issues.contains(&"duplicate_invoice".to_string()));
    assert!(issues.contains(&"category_on_non_variable".to_string()));
    assert!(issues.contains(&"paid_flag_ignored".to_string()));
    assert!(issues.contains(&"variable_without_category".to_string()));
}
