//! Fixed LaTeX text wrapped around the generated declarations.
//!
//! The preamble defines the user-facing commands (`\pc`, `\pcu`, `\pcvalue`,
//! `\pcunit`, `\pcuncertainty`, `\pcuncertainvalue`, `\pcget`, `\pcalias`) on
//! top of the `\physicalconstants@declare` macro that every generated line calls.

/// Emitted once before the first declaration.
pub const PREAMBLE: &str = r#"
\RequirePackage{etoolbox}
\RequirePackage{xparse}
\RequirePackage{siunitx}

\makeatletter

\def\physicalconstants@missingconstantmarker#1{%
    \ifx\@onlypreamble\@notprerr% only insert the marker when not in preamble
        {\textbf{??#1??}}%
    \fi
}
\def\physicalconstants@declare#1#2#3#4#5{% {name}{value}{unit}{uncertainty}
    \csdef{physicalconstants@#1@value}{#2}%
    \csdef{physicalconstants@#1@unit}{#3}%
    \csdef{physicalconstants@#1@uncertainty}{#4}%
    \csdef{physicalconstants@#1@uncertainvalue}{#5}%
}
\def\physicalconstants@blind@get#1#2{% {entry}{name}
    \csuse{physicalconstants@#2@#1}%
}
\def\physicalconstants@try#1{% {name}{subject}, gobbles subject if name is undefined
    \ifcsdef{physicalconstants@#1@value}{%
        \@firstofone
    }{%
        \GenericWarning{}{LaTeX Warning: I do not know the physical constant `#1'.}%
        \physicalconstants@missingconstantmarker{#1}%
        \@gobble
    }%
}
\def\physicalconstants@declarealias#1#2{% {new}{old}
    \physicalconstants@try{#2}{%
        \csdef{physicalconstants@#1@value}{\physicalconstants@blind@get{value}{#2}}%
        \csdef{physicalconstants@#1@unit}{\physicalconstants@blind@get{unit}{#2}}%
        \csdef{physicalconstants@#1@uncertainty}{\physicalconstants@blind@get{uncertainty}{#2}}%
        \csdef{physicalconstants@#1@uncertainvalue}{\physicalconstants@blind@get{uncertainvalue}{#2}}%
    }%
}
\def\physicalconstants@get#1#2{% {entry}{name}
    \physicalconstants@try{#2}{%
        \physicalconstants@blind@get{#1}{#2}%
    }%
}
\NewDocumentCommand\pcalias{}{% {new}{old}}
    \physicalconstants@declarealias
}
\NewDocumentCommand\pcget{}{% {entry}{name}
    \physicalconstants@get
}
\NewDocumentCommand\pcvalue{O{} m}{% [\num options]{name}
    \physicalconstants@try{#2}{%
        \num[#1]{\physicalconstants@blind@get{value}{#2}}%
    }%
}
\NewDocumentCommand\pcunit{O{} m}{% [\si options]{name}
    \physicalconstants@try{#2}{%
        \si[#1]{\physicalconstants@blind@get{unit}{#2}}%
    }%
}
\NewDocumentCommand\pcuncertainty{O{} m}{% [\num options]{name}
    \physicalconstants@try{#2}{%
        \num[#1]{\physicalconstants@blind@get{uncertainty}{#2}}%
    }%
}
\NewDocumentCommand\pcuncertainvalue{O{} m}{% [\num options]{name}
    \physicalconstants@try{#2}{%
        \num[#1]{\physicalconstants@blind@get{uncertainvalue}{#2}}%
    }%
}
\NewDocumentCommand\pc{O{} m}{% [\SI options]{name}
    \physicalconstants@try{#2}{%
        \SI[#1]{\physicalconstants@blind@get{value}{#2}}{\physicalconstants@blind@get{unit}{#2}}%
    }%
}
\NewDocumentCommand\pcu{O{} m}{% [\num options]{name}
    \physicalconstants@try{#2}{%
        \SI[#1]{\physicalconstants@blind@get{uncertainvalue}{#2}}{\physicalconstants@blind@get{unit}{#2}}%
    }%
}

"#;

/// Emitted once after the last declaration.
pub const POSTAMBLE: &str = r#"
\makeatother
"#;

/// Name of the macro each declaration line invokes.
pub const DECLARE_MACRO: &str = r"\physicalconstants@declare";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_defines_declare_macro() {
        assert!(PREAMBLE.contains(r"\def\physicalconstants@declare#1#2#3#4#5"));
        assert!(PREAMBLE.contains(r"\makeatletter"));
        assert!(PREAMBLE.contains(r"\RequirePackage{siunitx}"));
    }

    #[test]
    fn user_commands_are_defined() {
        for cmd in [
            r"\pcalias",
            r"\pcget",
            r"\pcvalue",
            r"\pcunit",
            r"\pcuncertainty",
            r"\pcuncertainvalue",
            r"\pc",
            r"\pcu",
        ] {
            assert!(
                PREAMBLE.contains(&format!(r"\NewDocumentCommand{cmd}{{")),
                "missing {cmd}"
            );
        }
    }

    #[test]
    fn postamble_restores_catcodes() {
        assert_eq!(POSTAMBLE.trim(), r"\makeatother");
    }
}
