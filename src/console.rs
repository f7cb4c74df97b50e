use std::io::{self, BufRead, IsTerminal, Write};

/// 화면 지우기 + 커서 원위치 ANSI 시퀀스.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// 줄 단위 입출력 채널. 표준 입출력뿐 아니라 테스트용 버퍼도 받는다.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_after_read: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// 표준 입출력에 연결한다. 화면 지우기는 출력이 터미널일 때만 켠다.
    pub fn stdio(clear_screen: bool) -> Self {
        let output = io::stdout();
        let interactive = output.is_terminal();
        Console::new(io::stdin().lock(), output).with_clear_screen(clear_screen && interactive)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_after_read: false,
        }
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_after_read = enabled;
        self
    }

    /// `==>` 표시를 붙여 안내 문구 한 줄을 출력한다.
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "==> {message}")?;
        self.output.flush()
    }

    /// 표시 없이 한 줄을 출력한다.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// 한 줄을 읽고 끝의 줄바꿈만 제거한다. 입력이 끝났으면 `None`.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        if self.clear_after_read {
            write!(self.output, "{CLEAR_SCREEN}")?;
            self.output.flush()?;
        }
        Ok(Some(buf))
    }

    /// 출력 대상을 돌려준다.
    pub fn into_output(self) -> W {
        self.output
    }
}
