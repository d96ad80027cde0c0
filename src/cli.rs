use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "package.jsonの依存関係からDocker公式イメージ候補を探すCLI",
    long_about = None
)]
pub struct Cli {
    /// 解析対象のpackage.jsonパス。省略時はカレントディレクトリのpackage.json。
    #[arg(short, long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// カタログAPIのURLを上書きします。
    #[arg(long = "catalog-url", value_name = "URL")]
    pub catalog_url: Option<String>,

    /// JSON出力を書き出すファイルパス。
    #[arg(long = "json-output", value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// JSONを標準出力へ出す場合は指定してください。
    #[arg(long = "print-json")]
    pub print_json: bool,

    /// 結果を指定文字列でフィルタします（イメージ名・説明が対象）。
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// テーブル出力時にDescription列を非表示にします。
    #[arg(long = "hide-description")]
    pub hide_description: bool,
}
