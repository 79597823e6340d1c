// src/ports/i18n.rs
//
// User-facing texts. Two bundles are shipped; the locale only decides between
// Chinese (`zh*`) and English (everything else).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl Locale {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.starts_with("zh") => Locale::Chinese,
            _ => Locale::English,
        }
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Locale::English => &EN,
            Locale::Chinese => &ZH,
        }
    }
}

/// One text per settings field
#[derive(Debug, PartialEq, Eq)]
pub struct FieldTexts {
    pub api_key: &'static str,
    pub default_tags: &'static str,
    pub default_folder: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub share_to_cubox: &'static str,
    pub no_active_file: &'static str,
    pub enter_api_key: &'static str,
    /// Heading of the settings panel
    pub setting: &'static str,
    pub settings: FieldTexts,
    pub setting_descriptions: FieldTexts,
    pub setting_placeholders: FieldTexts,
    pub success: &'static str,
    /// Prefix of the failure notice, the error text is appended as is
    pub failure: &'static str,
}

impl Translation {
    pub fn failure_notice(&self, error: &str) -> String {
        format!("{}{}", self.failure, error)
    }
}

pub static EN: Translation = Translation {
    share_to_cubox: "Share to Cubox",
    no_active_file: "No active file to share.",
    enter_api_key: "Please enter your Cubox API key in the plugin settings.",
    setting: "Share to Cubox Settings",
    settings: FieldTexts {
        api_key: "Cubox API Key",
        default_tags: "Default Tags (comma-separated)",
        default_folder: "Default Folder",
    },
    setting_descriptions: FieldTexts {
        api_key: "Enter your Cubox API Key (found in the API settings on the Cubox website)",
        default_tags: "Enter your default tags separated by commas (e.g., tag1, tag2, tag3)",
        default_folder: "Enter your default folder name",
    },
    setting_placeholders: FieldTexts {
        api_key: "Enter your Cubox API Key",
        default_tags: "Enter your default tags here",
        default_folder: "Enter your default folder name here",
    },
    success: "Successfully shared to Cubox.",
    failure: "Failed to share to Cubox:",
};

pub static ZH: Translation = Translation {
    share_to_cubox: "分享到 Cubox",
    no_active_file: "没有要分享的活动文件。",
    enter_api_key: "请在插件设置中输入您的 Cubox API 密钥。",
    setting: "Share to Cubox 设置",
    settings: FieldTexts {
        api_key: "Cubox API 密钥",
        default_tags: "默认标签",
        default_folder: "默认文件夹",
    },
    setting_descriptions: FieldTexts {
        api_key: "输入您的 Cubox API 密钥（在 Cubox 网站的 API 设置中）",
        default_tags: "输入您的默认标签，用逗号分隔（例如，tag1，tag2，tag3）",
        default_folder: "输入您的默认文件夹名称",
    },
    setting_placeholders: FieldTexts {
        api_key: "输入您的 Cubox API 密钥",
        default_tags: "在此输入您的默认标签",
        default_folder: "在此输入您的默认文件夹名称",
    },
    success: "成功分享到 Cubox。",
    failure: "分享到 Cubox 失败：",
};
