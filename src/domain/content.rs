//! Compiled-in dossier content
//!
//! Everything the dashboard shows lives here as `'static` tables. Nothing is created, mutated or
//! deleted at runtime; UI state refers to entries by id or index.

use std::time::Duration;

use serde::Serialize;
use strum::Display;

/// One scripted line of the boot log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BootLine {
    pub text: &'static str,
    /// Earliest start of this line, measured from the start of the sequence.
    pub delay: Duration,
}

impl BootLine {
    pub const fn new(text: &'static str, delay_ms: u64) -> Self {
        Self {
            text,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

pub const BOOT_SEQUENCE: &[BootLine] = &[
    BootLine::new("> POWER_ON...", 0),
    BootLine::new(
        "> LOADING PROFILE: TheSTIGMan (Security Technical Implementation Guide)",
        600,
    ),
    BootLine::new("> CONNECTING TO GITHUB REPOSITORY... [ OK ]", 1200),
    BootLine::new(
        "> CHECKING COMPLIANCE STANDARDS... [ NIST-800-53: OK ]",
        1800,
    ),
    BootLine::new("> INITIATING SYSTEM HARDENING...", 2400),
    BootLine::new("> SYSTEM READY.", 3000),
];

pub const BOOT_BANNER: &str = r#"   _____ _______ _____ _____ __  __          _   _
  / ____|__   __|_   _/ ____|  \/  |   /\   | \ | |
 | (___    | |    | || |  __| \  / |  /  \  |  \| |
  \___ \   | |    | || | |_ | |\/| | / /\ \ | . ` |
  ____) |  | |   _| || |__| | |  | |/ ____ \| |\  |
 |_____/   |_|  |_____\_____|_|  |_/_/    \_\_| \_|"#;

pub const BOOT_SUBTITLE: &str = "SECURITY TECHNICAL IMPLEMENTATION GUIDE SPECIALIST";

pub const TERMINAL_LABEL: &str = "MK-1 MAINTENANCE UNIT // DIAGNOSTIC TERMINAL v3.7.2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum SkillCategory {
    #[strum(to_string = "SOFTWARE")]
    Software,
    #[strum(to_string = "HARDWARE")]
    Hardware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0–100.
    pub value: u8,
    pub category: SkillCategory,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "LINUX",
        value: 92,
        category: SkillCategory::Software,
    },
    Skill {
        name: "PYTHON",
        value: 85,
        category: SkillCategory::Software,
    },
    Skill {
        name: "STIG COMPLIANCE",
        value: 95,
        category: SkillCategory::Software,
    },
    Skill {
        name: "NETWORK SEC",
        value: 88,
        category: SkillCategory::Software,
    },
    Skill {
        name: "AVIONICS",
        value: 90,
        category: SkillCategory::Hardware,
    },
    Skill {
        name: "AIRCRAFT SYS",
        value: 94,
        category: SkillCategory::Hardware,
    },
];

/// Severity label borrowed from STIG finding categories. Display grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Severity {
    #[strum(to_string = "I")]
    CatI,
    #[strum(to_string = "II")]
    CatII,
}

impl Severity {
    pub fn legend(self) -> &'static str {
        match self {
            Severity::CatI => "CAT I - MISSION CRITICAL",
            Severity::CatII => "CAT II - OPERATIONAL",
        }
    }
}

/// A project shown as a blip on the radar scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub severity: Severity,
    /// Bearing in degrees, 0 pointing up, clockwise.
    pub angle: f64,
    /// Range from the scope centre, 0–100.
    pub distance: f64,
    pub description: &'static str,
    pub link: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        id: 1,
        name: "RHEL-HARDENER",
        severity: Severity::CatI,
        angle: 45.0,
        distance: 60.0,
        description: "Automated RHEL 8/9 STIG compliance toolkit with 400+ controls",
        link: "#",
    },
    Contact {
        id: 2,
        name: "VULN-SCANNER",
        severity: Severity::CatI,
        angle: 120.0,
        distance: 75.0,
        description: "Network vulnerability assessment framework with CVE correlation",
        link: "#",
    },
    Contact {
        id: 3,
        name: "LOG-SENTINEL",
        severity: Severity::CatII,
        angle: 200.0,
        distance: 50.0,
        description: "Real-time log analysis daemon for anomaly detection",
        link: "#",
    },
    Contact {
        id: 4,
        name: "PATCH-PILOT",
        severity: Severity::CatII,
        angle: 280.0,
        distance: 85.0,
        description: "Automated patch management system with rollback capability",
        link: "#",
    },
    Contact {
        id: 5,
        name: "CONFIG-AUDITOR",
        severity: Severity::CatI,
        angle: 340.0,
        distance: 65.0,
        description: "Configuration drift detection and remediation engine",
        link: "#",
    },
];

pub fn find_contact(id: u32) -> Option<&'static Contact> {
    CONTACTS.iter().find(|contact| contact.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub redacted_summary: &'static str,
    pub body: &'static str,
}

pub const LOGS: &[LogEntry] = &[
    LogEntry {
        id: "IR-2024-001",
        title: "Migrating Legacy Systems to STIG-Compliant Baselines",
        date: "2024.12.15",
        redacted_summary: "Discovered 47 CAT I findings in production environment",
        body: "Successfully hardened 12 RHEL servers achieving 98% compliance score.",
    },
    LogEntry {
        id: "IR-2024-002",
        title: "Zero-Day Response Protocol Implementation",
        date: "2024.11.22",
        redacted_summary: "CVE-2024-XXXX exploited in adjacent network segment",
        body: "Implemented emergency patching workflow reducing MTTR by 60%.",
    },
    LogEntry {
        id: "IR-2024-003",
        title: "From Flight Line to Firewall: Lessons in Systematic Troubleshooting",
        date: "2024.10.08",
        redacted_summary: "Applied F-16 maintenance methodology to incident response",
        body: "Transitioned aircraft diagnostic protocols to cybersecurity operations.",
    },
];

pub fn find_log(id: &str) -> Option<&'static LogEntry> {
    LOGS.iter().find(|log| log.id == id)
}

pub const IDLE_MESSAGES: &[&str] = &[
    "Continuous monitoring active. System compliant.",
    "Scanning for configuration drift... None detected.",
    "Verifying STIG compliance status... PASS",
    "Checking certificate expiration... All valid.",
    "Monitoring network anomalies... Clear.",
];

/// Operator facts shown in the sidebar, label then value.
pub const OPERATOR_STATUS: &[(&str, &str)] = &[
    ("OPERATOR", "TheSTIGMan"),
    ("ROLE", "HARDENING EXPERT"),
    ("CLEARANCE", "VERIFIED"),
];

pub const OPERATOR_ID: &str = "TSM-2024";

pub const MISSION_STATEMENT: &str = "Transitioning from maintaining multi-million dollar aircraft \
systems to securing digital infrastructure. Applying the same rigorous, methodical approach used \
on the flight line to system hardening and compliance automation.";

pub const OPERATIONAL_BACKGROUND: &[&str] = &[
    "Seven years maintaining F-16 Fighting Falcon avionics systems taught me that every wire, \
every connection, every system interaction matters. A single overlooked discrepancy can ground \
an aircraft, or worse.",
    "In cybersecurity, the stakes are similar. A misconfigured firewall rule, an unpatched \
vulnerability, an overly permissive access control: these are the \"discrepancies\" I now hunt \
and remediate.",
];

pub const QUALIFICATIONS: &[&str] = &[
    "USAF Aircraft Maintenance Specialist (7+ years)",
    "F-16 Avionics Systems Certified",
    "CompTIA Security+ Certified",
    "RHEL System Administrator",
    "DISA STIG Implementation Expert",
    "Ansible Automation Specialist",
];

/// Methodology steps: title then description.
pub const METHODOLOGY: &[(&str, &str)] = &[
    ("ASSESS", "Identify vulnerabilities and compliance gaps"),
    ("DOCUMENT", "Technical Orders -> Runbooks & Playbooks"),
    ("REMEDIATE", "Systematic hardening with verification"),
    ("AUTOMATE", "Ansible, Python, CI/CD pipelines"),
];
