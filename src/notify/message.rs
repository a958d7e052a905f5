// src/notify/message.rs

use std::collections::BTreeSet;

use crate::config::TargetSpec;
use crate::config::consts::MESSAGE_TITLE;
use crate::specs::{CellReport, CellStatus};

/// A composed outbound message plus the identity of what it announces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// `CellResult::key` of every available cell; empty for a "no vacancy" notice.
    pub keys: BTreeSet<String>,
}

impl Notice {
    pub fn has_vacancy(&self) -> bool {
        !self.keys.is_empty()
    }
}

/// Build the single batched message for this run.
///
/// `None` when nothing is available and `always` is off: nothing to send.
pub fn compose(report: &CellReport, target: &TargetSpec, page_url: &str, always: bool) -> Option<Notice> {
    let available: Vec<_> = report.available().collect();
    if available.is_empty() && !always {
        return None;
    }

    let mut lines = vec![
        s!(MESSAGE_TITLE),
        join!("対象日: ", &target.dates.join(", ")),
    ];

    if available.is_empty() {
        lines.push(s!("【空き無し】"));
    } else {
        lines.push(s!("【空きあり】"));
        for c in &available {
            let marker = c.status.marker().unwrap_or("");
            lines.push(format!("・{} の {}: {}", c.date, c.row, marker));
        }

        let errors: Vec<String> = report
            .unknown()
            .filter_map(|c| match &c.status {
                CellStatus::Unknown(miss) => Some(format!("・{} の {}: {}", c.date, c.row, miss)),
                _ => None,
            })
            .collect();
        if !errors.is_empty() {
            lines.push(s!("【取得エラー】(参考)"));
            lines.extend(errors);
        }
    }

    lines.push(join!("確認: ", page_url));

    Some(Notice {
        text: lines.join("\n"),
        keys: available.iter().map(|c| c.key()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::match_document;

    const URL: &str = "https://example.test/calendar";
    const DOC: &str = r#"
        <table>
          <thead><tr><th>区分</th><th>10/23</th><th>10/24</th></tr></thead>
          <tbody>
            <tr><th>キャンプ宿泊</th><td>×</td><td>〇</td></tr>
            <tr><th>キャンプ日帰り</th><td>△</td><td>×</td></tr>
          </tbody>
        </table>
    "#;

    fn target(dates: &[&str], rows: &[&str]) -> TargetSpec {
        TargetSpec::new(dates.iter().copied(), rows.iter().copied())
    }

    #[test]
    fn nothing_available_composes_nothing() {
        let t = target(&["10/24"], &["キャンプ日帰り"]);
        let report = match_document(DOC, &t);
        assert_eq!(compose(&report, &t, URL, false), None);
    }

    #[test]
    fn lists_only_available_rows() {
        let t = target(&["10/23"], &["キャンプ宿泊", "キャンプ日帰り"]);
        let report = match_document(DOC, &t);
        let notice = compose(&report, &t, URL, false).unwrap();
        assert_eq!(
            notice.text,
            "ふもとっぱら空き検知\n対象日: 10/23\n【空きあり】\n・10/23 の キャンプ日帰り: △\n確認: https://example.test/calendar"
        );
        assert!(!notice.text.contains("キャンプ宿泊"));
        assert_eq!(notice.keys.len(), 1);
        assert!(notice.has_vacancy());
    }

    #[test]
    fn unknown_cells_listed_as_errors_when_sending() {
        let t = target(&["10/24", "11/31"], &["キャンプ宿泊"]);
        let report = match_document(DOC, &t);
        let notice = compose(&report, &t, URL, false).unwrap();
        assert!(notice.text.contains("・10/24 の キャンプ宿泊: 〇"));
        assert!(notice.text.contains("【取得エラー】(参考)\n・11/31 の キャンプ宿泊: date column not found"));
        assert!(notice.text.contains("対象日: 10/24, 11/31"));
    }

    #[test]
    fn always_notify_reports_no_vacancy() {
        let t = target(&["11/31"], &["キャンプ宿泊"]);
        let report = match_document(DOC, &t);
        let notice = compose(&report, &t, URL, true).unwrap();
        assert!(notice.text.contains("【空き無し】"));
        assert!(!notice.text.contains("取得エラー"));
        assert!(!notice.has_vacancy());
    }
}
